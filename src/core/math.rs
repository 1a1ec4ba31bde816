// Math utilities and helper functions

/// Clamp a value between min and max
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Scale a pixel dimension by a factor, never collapsing below one pixel
pub fn scale_dimension(value: u32, factor: f32) -> u32 {
    ((value as f32 * factor).floor() as u32).max(1)
}

/// Upper bound for a window's x coordinate so it stays fully on screen
pub fn max_offset(screen_extent: u32, item_extent: u32) -> i32 {
    screen_extent.saturating_sub(item_extent) as i32
}
