// Asset loading functionality

use super::AssetError;
use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, RgbaImage};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Supported asset types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetType {
    Image,
    Animation,
    Sound,
}

impl AssetType {
    /// Human readable name used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            AssetType::Image => "image",
            AssetType::Animation => "animation",
            AssetType::Sound => "sound",
        }
    }

    /// Get supported file extensions for this asset type
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            AssetType::Image => &["png", "jpg", "jpeg", "gif"],
            AssetType::Animation => &["gif"],
            AssetType::Sound => &["wav", "ogg", "mp3"],
        }
    }

    /// Check whether a file name carries one of this type's extensions
    pub fn accepts(&self, name: &str) -> bool {
        Path::new(name)
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
            .is_some_and(|ext| self.extensions().contains(&ext.as_str()))
    }
}

/// Asset loader responsible for finding and decoding asset files
pub struct AssetLoader {
    base_path: PathBuf,
}

impl AssetLoader {
    /// Create a new asset loader with the given base path
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the full path for an asset
    pub fn resolve_path(&self, name: &str) -> PathBuf {
        self.base_path.join(name)
    }

    /// Resolve an asset and make sure it exists and has the right type
    pub fn locate(&self, asset_type: AssetType, name: &str) -> Result<PathBuf, AssetError> {
        if !asset_type.accepts(name) {
            return Err(AssetError::InvalidType {
                name: name.to_string(),
                expected: asset_type.name().to_string(),
            });
        }

        let path = self.resolve_path(name);
        if !path.is_file() {
            return Err(AssetError::NotFound(path.to_string_lossy().to_string()));
        }

        Ok(path)
    }

    /// Decode a still image into RGBA
    pub fn load_image(&self, name: &str) -> Result<RgbaImage, AssetError> {
        let path = self.locate(AssetType::Image, name)?;
        let image = image::open(&path).map_err(|source| AssetError::Decode {
            path: path.to_string_lossy().to_string(),
            source,
        })?;

        log::debug!("Loaded image {} ({}x{})", name, image.width(), image.height());
        Ok(image.to_rgba8())
    }

    /// Decode every frame of an animated image into RGBA
    pub fn load_animation(&self, name: &str) -> Result<Vec<RgbaImage>, AssetError> {
        let path = self.locate(AssetType::Animation, name)?;
        let decode_error = |source| AssetError::Decode {
            path: path.to_string_lossy().to_string(),
            source,
        };

        let reader = BufReader::new(File::open(&path)?);
        let decoder = GifDecoder::new(reader).map_err(decode_error)?;
        let frames = decoder
            .into_frames()
            .collect_frames()
            .map_err(decode_error)?;

        if frames.is_empty() {
            return Err(AssetError::Empty(path.to_string_lossy().to_string()));
        }

        log::debug!("Loaded animation {} ({} frames)", name, frames.len());
        Ok(frames.into_iter().map(|frame| frame.into_buffer()).collect())
    }

    /// Get the base path
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}
