// Arcade platformer physics over the tile map

use super::tile_map::TileMap;
use crate::engine::game_loop::TICK_RATE;
use crate::engine::physics::{presets, CollisionGroups, PhysicsWorld, Real, Vector};
use crate::game::characters::Character;
use glam::Vec2;

/// How far below the character a jump probe reaches
const JUMP_PROBE_DISTANCE: Real = 2.0;

/// Difference between requested and achieved motion that counts as blocked
const BLOCKED_EPSILON: f32 = 1e-3;

/// Horizontal inset of the outer jump probes from the box edges
const PROBE_INSET: f32 = 1.0;

/// Result of one physics step
#[derive(Debug, Clone)]
pub struct PhysicsStep {
    pub character: Character,
    /// Character rests on a surface after the move
    pub grounded: bool,
}

/// Moves the character through the level
pub trait PlatformPhysics {
    /// Apply gravity, move by the character's velocity and resolve collisions
    ///
    /// Vertical velocity is zeroed when the move was blocked vertically.
    fn integrate_and_resolve(&mut self, character: Character, gravity: f32) -> PhysicsStep;

    /// Whether the character stands on something it can jump off
    fn can_jump(&self, character: &Character) -> bool;
}

/// `PlatformPhysics` backed by a rapier character controller
pub struct RapierPlatformer {
    world: PhysicsWorld,
}

impl RapierPlatformer {
    /// Build static colliders for every solid run of tiles
    pub fn new(map: &TileMap, tile_size: f32) -> Self {
        let mut world = PhysicsWorld::new(1.0 / TICK_RATE as Real);

        for run in map.solid_runs(tile_size) {
            let center = run.center();
            let body = world.add_rigid_body(presets::terrain_body(center.x, center.y));
            world.add_collider(presets::terrain_collider(run.width, run.height), body);
        }
        world.refresh_queries();

        log::info!("Physics ready with {} terrain colliders", world.collider_count());

        Self { world }
    }
}

impl PlatformPhysics for RapierPlatformer {
    fn integrate_and_resolve(&mut self, mut character: Character, gravity: f32) -> PhysicsStep {
        let body = &mut character.body;
        body.velocity.y -= gravity;

        let shape = presets::character_shape(body.size.x, body.size.y);
        let movement = self.world.move_shape(
            &shape,
            Vector::new(body.position.x, body.position.y),
            Vector::new(body.velocity.x, body.velocity.y),
            CollisionGroups::Character.query_filter(),
        );

        let moved = Vec2::new(movement.translation.x, movement.translation.y);
        body.position += moved;

        let blocked_vertically = (moved.y - body.velocity.y).abs() > BLOCKED_EPSILON;
        let landed = blocked_vertically && body.velocity.y < 0.0;
        if blocked_vertically {
            body.velocity.y = 0.0;
        }

        PhysicsStep {
            grounded: movement.grounded || landed,
            character,
        }
    }

    fn can_jump(&self, character: &Character) -> bool {
        let bounds = character.bounds();
        let max_toi = JUMP_PROBE_DISTANCE + self.world.contact_offset();
        let probes = [
            bounds.left + PROBE_INSET,
            bounds.center().x,
            bounds.right() - PROBE_INSET,
        ];

        probes.iter().any(|&x| {
            self.world
                .raycast(
                    Vector::new(x, bounds.bottom),
                    Vector::new(0.0, -1.0),
                    max_toi,
                    true,
                    CollisionGroups::Character.query_filter(),
                )
                .is_some()
        })
    }
}
