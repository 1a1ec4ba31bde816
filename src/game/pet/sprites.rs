// Directional sprite sets for the pet

use super::animation::{FrameRef, Pose};
use super::config::PetConfig;
use crate::engine::assets::{fit_to_canvas, mirror, resize_by, AssetError, AssetLoader};
use image::RgbaImage;

/// Standing image and walk cycle for both directions.
///
/// Index 0 of each array faces right, index 1 faces left. Both walk
/// sequences always have the same length.
#[derive(Debug, Clone)]
pub struct SpriteSet<T> {
    standing: [T; 2],
    walking: [Vec<T>; 2],
}

impl<T> SpriteSet<T> {
    /// Number of frames in the walk cycle
    pub fn walk_frame_count(&self) -> usize {
        self.walking[0].len()
    }

    /// Look up the image for a frame reference
    pub fn frame(&self, frame: FrameRef) -> &T {
        let direction = frame.facing.index();
        match frame.pose {
            Pose::Standing => &self.standing[direction],
            Pose::Walking(index) => {
                let frames = &self.walking[direction];
                &frames[index % frames.len()]
            }
        }
    }

    /// Convert every image, e.g. to upload them to the GPU
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> SpriteSet<U> {
        let [stand_right, stand_left] = self.standing;
        let [walk_right, walk_left] = self.walking;

        let standing = [f(stand_right), f(stand_left)];
        let walk_right = walk_right.into_iter().map(&mut f).collect();
        let walk_left = walk_left.into_iter().map(&mut f).collect();

        SpriteSet {
            standing,
            walking: [walk_right, walk_left],
        }
    }
}

impl SpriteSet<RgbaImage> {
    /// Decode the configured standing image and walk animation
    pub fn load(loader: &AssetLoader, config: &PetConfig) -> Result<Self, AssetError> {
        let standing = loader.load_image(&config.standing_image)?;
        let walk_frames = loader.load_animation(&config.walking_animation)?;
        let set = Self::from_images(&standing, &walk_frames, config.resize_factor)?;

        let (width, height) = set.frame_size();
        log::info!(
            "Loaded pet sprites: {} walk frames at {}x{}",
            set.walk_frame_count(),
            width,
            height
        );
        Ok(set)
    }

    /// Build the sprite set from decoded, right-facing source images.
    ///
    /// Everything is scaled by `resize_factor`. The standing image is placed
    /// on a canvas matching the walk frames so the window size stays fixed.
    pub fn from_images(
        standing: &RgbaImage,
        walk_frames: &[RgbaImage],
        resize_factor: f32,
    ) -> Result<Self, AssetError> {
        let walk_right: Vec<RgbaImage> = walk_frames
            .iter()
            .map(|frame| resize_by(frame, resize_factor))
            .collect();

        let Some(first) = walk_right.first() else {
            return Err(AssetError::Empty("walk animation".to_string()));
        };
        let (width, height) = first.dimensions();

        let walk_right: Vec<RgbaImage> = walk_right
            .iter()
            .map(|frame| fit_to_canvas(frame, width, height))
            .collect();
        let walk_left = walk_right.iter().map(mirror).collect();

        let stand_right = fit_to_canvas(&resize_by(standing, resize_factor), width, height);
        let stand_left = mirror(&stand_right);

        Ok(Self {
            standing: [stand_right, stand_left],
            walking: [walk_right, walk_left],
        })
    }

    /// Pixel size shared by every frame
    pub fn frame_size(&self) -> (u32, u32) {
        self.standing[0].dimensions()
    }
}
