// Type-safe frame handle system

use std::marker::PhantomData;

/// Unique identifier for a loaded image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetId(pub(crate) u64);

impl AssetId {
    /// Derive an ID from the source path and orientation of an image
    pub fn from_path(path: &str, mirrored: bool) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        path.hash(&mut hasher);
        mirrored.hash(&mut hasher);
        Self(hasher.finish())
    }
}

/// Opaque handle to a loaded asset
///
/// The `T` parameter keeps handles of different asset kinds apart.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct AssetHandle<T> {
    pub(crate) id: AssetId,
    _phantom: PhantomData<T>,
}

// Manual impls so handles stay `Copy` whatever the marker type is
impl<T> Clone for AssetHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for AssetHandle<T> {}

impl<T> AssetHandle<T> {
    pub(crate) fn new(id: AssetId) -> Self {
        Self {
            id,
            _phantom: PhantomData,
        }
    }

    /// Get the underlying asset ID
    pub fn id(&self) -> AssetId {
        self.id
    }
}

/// Marker for a single visual frame (one decoded image, possibly mirrored)
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct FrameAsset;

pub type FrameHandle = AssetHandle<FrameAsset>;
