// Image transforms applied to decoded frames before upload

use crate::core::math::scale_dimension;
use image::imageops::{self, FilterType};
use image::RgbaImage;

/// Resize an image by a uniform factor
pub fn resize_by(image: &RgbaImage, factor: f32) -> RgbaImage {
    let width = scale_dimension(image.width(), factor);
    let height = scale_dimension(image.height(), factor);
    if (width, height) == image.dimensions() {
        return image.clone();
    }
    imageops::resize(image, width, height, FilterType::Triangle)
}

/// Mirror an image left-to-right
pub fn mirror(image: &RgbaImage) -> RgbaImage {
    imageops::flip_horizontal(image)
}

/// Place an image bottom-centred on a transparent canvas.
///
/// Anything that does not fit is cropped, so the result is always exactly
/// `width` x `height`.
pub fn fit_to_canvas(image: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    if image.dimensions() == (width, height) {
        return image.clone();
    }
    let mut canvas = RgbaImage::new(width, height);
    let x = (i64::from(width) - i64::from(image.width())) / 2;
    let y = i64::from(height) - i64::from(image.height());
    imageops::overlay(&mut canvas, image, x, y);
    canvas
}
