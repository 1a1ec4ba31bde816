// Pointer position tracking

use crate::core::math::{clamp, max_offset};
use glam::IVec2;
use winit::dpi::{PhysicalPosition, PhysicalSize};

/// Last known pointer position inside one window
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerTracker {
    local: Option<IVec2>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a `CursorMoved` position and return it in whole pixels
    pub fn moved(&mut self, position: PhysicalPosition<f64>) -> IVec2 {
        let local = IVec2::new(position.x.floor() as i32, position.y.floor() as i32);
        self.local = Some(local);
        local
    }

    /// The pointer left the window
    pub fn left(&mut self) {
        self.local = None;
    }

    /// Pointer position relative to the window origin
    pub fn local(&self) -> Option<IVec2> {
        self.local
    }

    /// Pointer position in screen coordinates given the window origin
    pub fn root(&self, window_origin: IVec2) -> Option<IVec2> {
        self.local.map(|local| window_origin + local)
    }
}

/// Top-left corner for a popup opened at `anchor`, kept fully on screen
pub fn popup_origin(
    anchor: IVec2,
    popup: PhysicalSize<u32>,
    screen: PhysicalSize<u32>,
) -> IVec2 {
    IVec2::new(
        clamp(anchor.x, 0, max_offset(screen.width, popup.width)),
        clamp(anchor.y, 0, max_offset(screen.height, popup.height)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: PhysicalSize<u32> = PhysicalSize::new(1920, 1080);
    const POPUP: PhysicalSize<u32> = PhysicalSize::new(180, 84);

    #[test]
    fn test_tracks_local_position() {
        let mut pointer = PointerTracker::new();
        assert_eq!(pointer.local(), None);

        let local = pointer.moved(PhysicalPosition::new(10.7, 4.2));
        assert_eq!(local, IVec2::new(10, 4));
        assert_eq!(pointer.local(), Some(IVec2::new(10, 4)));
    }

    #[test]
    fn test_root_adds_window_origin() {
        let mut pointer = PointerTracker::new();
        pointer.moved(PhysicalPosition::new(5.0, 6.0));
        assert_eq!(
            pointer.root(IVec2::new(200, 300)),
            Some(IVec2::new(205, 306))
        );

        pointer.left();
        assert_eq!(pointer.root(IVec2::new(200, 300)), None);
    }

    #[test]
    fn test_root_uses_current_window_origin() {
        // The window has not reached its requested origin yet
        let mut pointer = PointerTracker::new();
        pointer.moved(PhysicalPosition::new(50.0, 40.0));
        assert_eq!(
            pointer.root(IVec2::new(200, 200)),
            Some(IVec2::new(250, 240))
        );

        // Once it has, the same screen point gives a smaller local offset
        pointer.moved(PhysicalPosition::new(40.0, 40.0));
        assert_eq!(
            pointer.root(IVec2::new(210, 200)),
            Some(IVec2::new(250, 240))
        );
    }

    #[test]
    fn test_popup_opens_at_anchor() {
        assert_eq!(
            popup_origin(IVec2::new(300, 400), POPUP, SCREEN),
            IVec2::new(300, 400)
        );
    }

    #[test]
    fn test_popup_near_bottom_right_corner_stays_on_screen() {
        assert_eq!(
            popup_origin(IVec2::new(1900, 1070), POPUP, SCREEN),
            IVec2::new(1920 - 180, 1080 - 84)
        );
    }

    #[test]
    fn test_popup_left_of_screen_is_pulled_back() {
        assert_eq!(
            popup_origin(IVec2::new(-25, -3), POPUP, SCREEN),
            IVec2::ZERO
        );
    }

    #[test]
    fn test_popup_larger_than_screen_pins_to_origin() {
        let tiny = PhysicalSize::new(100, 50);
        assert_eq!(
            popup_origin(IVec2::new(60, 20), POPUP, tiny),
            IVec2::ZERO
        );
    }
}
