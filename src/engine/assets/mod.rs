// Asset loading
//
// Resolves the pet's image, animation and sound files against the asset
// directory and decodes the images into RGBA frames. Everything here runs
// once at startup; any failure aborts before a window is shown.

mod frames;
mod loader;

pub use frames::{fit_to_canvas, mirror, resize_by};
pub use loader::{AssetLoader, AssetType};

/// Asset loading errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Invalid asset type for {name}: expected {expected}")]
    InvalidType { name: String, expected: String },

    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Animation has no frames: {0}")]
    Empty(String),

    #[error("Failed to load sound {path}: {message}")]
    Sound { path: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
