// Central storage for decoded frames

use super::{AssetError, AssetHandle, AssetId, AssetLoader, FrameAsset, FrameHandle};
use std::collections::HashMap;
use std::path::Path;

/// A decoded RGBA8 image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameImage {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA8 pixels, top row first
    pub rgba: Vec<u8>,
}

impl FrameImage {
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Self {
        debug_assert_eq!(rgba.len(), (width * height * 4) as usize);
        Self {
            width,
            height,
            rgba,
        }
    }

    /// RGBA value of a pixel (x to the right, y downward)
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * self.width + x) * 4) as usize;
        [
            self.rgba[i],
            self.rgba[i + 1],
            self.rgba[i + 2],
            self.rgba[i + 3],
        ]
    }
}

/// Owns every decoded frame and hands out opaque handles to them
#[derive(Debug, Default)]
pub struct FrameStore {
    frames: HashMap<AssetId, FrameImage>,
}

impl FrameStore {
    pub fn new() -> Self {
        Self {
            frames: HashMap::new(),
        }
    }

    /// Load a frame from disk; repeated loads of the same file and
    /// orientation return the cached handle
    pub fn load_frame(
        &mut self,
        loader: &AssetLoader,
        path: &Path,
        mirrored: bool,
    ) -> Result<FrameHandle, AssetError> {
        let id = AssetId::from_path(&path.to_string_lossy(), mirrored);
        if self.frames.contains_key(&id) {
            return Ok(AssetHandle::new(id));
        }

        let image = loader.load_image(path, mirrored)?;
        log::trace!(
            "Loaded frame {} ({}x{}, mirrored: {})",
            path.display(),
            image.width,
            image.height,
            mirrored
        );
        self.frames.insert(id, image);

        Ok(AssetHandle::new(id))
    }

    /// Register an already-decoded image under a name
    pub fn insert(&mut self, name: &str, image: FrameImage) -> AssetHandle<FrameAsset> {
        let id = AssetId::from_path(name, false);
        self.frames.insert(id, image);
        AssetHandle::new(id)
    }

    /// Get a frame by handle
    pub fn get(&self, handle: FrameHandle) -> Option<&FrameImage> {
        self.frames.get(&handle.id())
    }

    /// Number of decoded frames held
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, color: [u8; 4]) -> FrameImage {
        let rgba = color
            .iter()
            .copied()
            .cycle()
            .take((width * height * 4) as usize)
            .collect();
        FrameImage::new(width, height, rgba)
    }

    #[test]
    fn test_insert_and_get() {
        let mut store = FrameStore::new();
        let handle = store.insert("placeholder", solid(4, 2, [1, 2, 3, 255]));

        let image = store.get(handle).unwrap();
        assert_eq!((image.width, image.height), (4, 2));
        assert_eq!(image.pixel(3, 1), [1, 2, 3, 255]);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_unknown_handle() {
        let store = FrameStore::new();
        let handle: FrameHandle = AssetHandle::new(AssetId(99));
        assert!(store.get(handle).is_none());
        assert!(store.is_empty());
    }
}
