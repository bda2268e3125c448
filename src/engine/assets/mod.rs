// Asset management system
//
// Decodes frame images from disk and hands out opaque handles to them.

mod handle;
mod loader;
mod store;

pub use handle::{AssetHandle, AssetId, FrameAsset, FrameHandle};
pub use loader::AssetLoader;
pub use store::{FrameImage, FrameStore};

/// Asset loading errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Failed to decode {path}: {reason}")]
    Decode { path: String, reason: String },

    #[error("No frames found in {0}")]
    EmptySequence(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
