// Character system
//
// This module contains everything related to the playable character:
// - Character data structure
// - Character stats
// - Animation mode state machine
// - Frame registry and per-tick frame selection

pub mod animation;
pub mod character;
pub mod frames;
pub mod state;
pub mod stats;

// Re-export commonly used types
pub use animation::AnimationError;
pub use character::Character;
pub use frames::FrameRegistry;
pub use state::{AnimationCategory, AnimationMode, Facing, ModeEvent};
pub use stats::BASE_STATS;
