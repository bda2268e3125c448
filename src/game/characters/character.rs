// The playable character

use super::animation::AnimationState;
use super::stats::CharacterStats;
use crate::core::math::Rect;
use glam::Vec2;

/// Kinematic state of a box moving through the level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// Center of the box
    pub position: Vec2,
    /// Displacement per tick
    pub velocity: Vec2,
    pub size: Vec2,
}

impl Body {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            size,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.position, self.size)
    }
}

/// The one animatable entity
///
/// Owned by the simulation and passed by value through input, physics and
/// animation each tick.
#[derive(Debug, Clone)]
pub struct Character {
    pub body: Body,
    pub animation: AnimationState,
    /// Run modifier was held when the current horizontal motion started
    pub running: bool,
    pub stats: CharacterStats,
}

impl Character {
    /// `frame_size` is the pixel size of the standing frame; the collision
    /// box is that size times the stats scale
    pub fn new(spawn: Vec2, frame_size: Vec2, stats: CharacterStats) -> Self {
        let body = Body::new(spawn, frame_size * stats.scale);
        let animation = AnimationState::new(spawn, stats.animation_tuning());

        Self {
            body,
            animation,
            running: false,
            stats,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.body.velocity
    }

    pub fn bounds(&self) -> Rect {
        self.body.bounds()
    }
}
