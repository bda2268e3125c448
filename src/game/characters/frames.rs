// Per-facing, per-category frame sequences

use super::animation::AnimationError;
use super::state::{AnimationCategory, Facing};
use crate::engine::assets::{AssetError, AssetId, AssetLoader, FrameHandle, FrameStore};
use glam::Vec2;
use std::collections::HashMap;

/// Ordered, immutable list of frames for one category and facing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameSequence {
    frames: Vec<FrameHandle>,
}

impl FrameSequence {
    pub fn new(frames: Vec<FrameHandle>) -> Self {
        Self { frames }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<FrameHandle> {
        self.frames.get(index).copied()
    }
}

/// Lookup table from (category, facing) to frame sequence
///
/// Populated once at startup and read-only afterwards.
#[derive(Debug, Default)]
pub struct FrameRegistry {
    sequences: HashMap<(AnimationCategory, Facing), FrameSequence>,
    sizes: HashMap<AssetId, Vec2>,
}

impl FrameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, category: AnimationCategory, facing: Facing, sequence: FrameSequence) {
        self.sequences.insert((category, facing), sequence);
    }

    /// Remember the pixel size of a frame so it can be drawn at scale
    pub fn record_size(&mut self, frame: FrameHandle, size: Vec2) {
        self.sizes.insert(frame.id(), size);
    }

    pub fn frame_size(&self, frame: FrameHandle) -> Option<Vec2> {
        self.sizes.get(&frame.id()).copied()
    }

    /// Non-empty sequence for the pair, or a configuration error
    pub fn sequence(
        &self,
        category: AnimationCategory,
        facing: Facing,
    ) -> Result<&FrameSequence, AnimationError> {
        self.sequences
            .get(&(category, facing))
            .filter(|sequence| !sequence.is_empty())
            .ok_or(AnimationError::MissingFrames { category, facing })
    }

    pub fn has_frames(&self, category: AnimationCategory, facing: Facing) -> bool {
        self.sequence(category, facing).is_ok()
    }

    /// Load every category from `images/<category>/N.png`
    ///
    /// Right-facing frames are the files as stored; left-facing frames are
    /// the same files mirrored.
    pub fn load(loader: &AssetLoader, store: &mut FrameStore) -> Result<Self, AssetError> {
        let mut registry = Self::new();

        for category in AnimationCategory::ALL {
            let directory = format!("images/{}", category.directory_name());
            let paths = loader.sequence_paths(&directory)?;

            for facing in [Facing::Right, Facing::Left] {
                let mut frames = Vec::with_capacity(paths.len());
                for path in &paths {
                    let handle = store.load_frame(loader, path, facing.is_mirrored())?;
                    if let Some(image) = store.get(handle) {
                        registry.record_size(
                            handle,
                            Vec2::new(image.width as f32, image.height as f32),
                        );
                    }
                    frames.push(handle);
                }
                registry.register(category, facing, FrameSequence::new(frames));
            }

            log::debug!("Registered {} {} frames", paths.len(), category);
        }

        Ok(registry)
    }
}

/// Registry with 1 stand, 10 walk, 8 run, 12 jump and 8 die frames per facing
#[cfg(test)]
pub(crate) fn sample_registry() -> (FrameRegistry, FrameStore) {
    use crate::engine::assets::FrameImage;

    let mut store = FrameStore::new();
    let mut registry = FrameRegistry::new();
    let counts = [
        (AnimationCategory::Stand, 1),
        (AnimationCategory::Walk, 10),
        (AnimationCategory::Run, 8),
        (AnimationCategory::Jump, 12),
        (AnimationCategory::Die, 8),
    ];
    for (category, count) in counts {
        for facing in [Facing::Left, Facing::Right] {
            let frames = (0..count)
                .map(|i| {
                    let frame = store.insert(
                        &format!("{}/{}/{}", category, facing, i),
                        FrameImage::new(1, 1, vec![0; 4]),
                    );
                    registry.record_size(frame, Vec2::new(100.0, 200.0));
                    frame
                })
                .collect();
            registry.register(category, facing, FrameSequence::new(frames));
        }
    }
    (registry, store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::FrameImage;

    fn handles(store: &mut FrameStore, prefix: &str, count: usize) -> Vec<FrameHandle> {
        (0..count)
            .map(|i| store.insert(&format!("{}/{}", prefix, i), FrameImage::new(1, 1, vec![0; 4])))
            .collect()
    }

    #[test]
    fn test_register_and_lookup() {
        let mut store = FrameStore::new();
        let mut registry = FrameRegistry::new();
        let walk = handles(&mut store, "walk", 10);
        registry.register(
            AnimationCategory::Walk,
            Facing::Right,
            FrameSequence::new(walk.clone()),
        );

        let sequence = registry
            .sequence(AnimationCategory::Walk, Facing::Right)
            .unwrap();
        assert_eq!(sequence.len(), 10);
        assert_eq!(sequence.get(3), Some(walk[3]));
        assert_eq!(sequence.get(10), None);
    }

    #[test]
    fn test_missing_sequence_is_error() {
        let registry = FrameRegistry::new();
        let err = registry
            .sequence(AnimationCategory::Jump, Facing::Left)
            .unwrap_err();

        assert!(matches!(
            err,
            AnimationError::MissingFrames {
                category: AnimationCategory::Jump,
                facing: Facing::Left
            }
        ));
    }

    #[test]
    fn test_empty_sequence_is_error() {
        let mut registry = FrameRegistry::new();
        registry.register(AnimationCategory::Die, Facing::Right, FrameSequence::default());

        assert!(!registry.has_frames(AnimationCategory::Die, Facing::Right));
        assert!(registry.sequence(AnimationCategory::Die, Facing::Right).is_err());
    }

    #[test]
    fn test_frame_sizes() {
        let mut store = FrameStore::new();
        let mut registry = FrameRegistry::new();
        let frame = handles(&mut store, "stand", 1)[0];

        assert_eq!(registry.frame_size(frame), None);
        registry.record_size(frame, Vec2::new(120.0, 200.0));
        assert_eq!(registry.frame_size(frame), Some(Vec2::new(120.0, 200.0)));
    }

    #[test]
    fn test_load_missing_directory_fails() {
        let loader = AssetLoader::new(std::env::temp_dir().join("scroll-animator-no-such-dir"));
        let mut store = FrameStore::new();

        let result = FrameRegistry::load(&loader, &mut store);
        assert!(matches!(result, Err(AssetError::EmptySequence(_))));
    }
}
