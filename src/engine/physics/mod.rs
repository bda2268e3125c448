// Collision world using rapier2d

pub mod body;
mod collision;
mod world;

pub use body::presets;
pub use collision::CollisionGroups;
pub use world::PhysicsWorld;

// Re-export commonly used rapier types for convenience
pub use rapier2d::prelude::{Real, Vector};
