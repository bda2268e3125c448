use super::collision::CollisionGroups;
use rapier2d::prelude::*;

/// Builder for creating rigid bodies with common configurations
pub struct BodyBuilder {
    body_type: RigidBodyType,
    position: Isometry<Real>,
    can_sleep: bool,
}

impl BodyBuilder {
    /// Create a new fixed (static) body (completely immovable)
    pub fn new_fixed() -> Self {
        Self {
            body_type: RigidBodyType::Fixed,
            position: Isometry::identity(),
            can_sleep: false,
        }
    }

    /// Set the initial position of the body
    pub fn position(mut self, x: Real, y: Real) -> Self {
        self.position = Isometry::translation(x, y);
        self
    }

    /// Build the rigid body
    pub fn build(self) -> RigidBody {
        RigidBodyBuilder::new(self.body_type)
            .position(self.position)
            .can_sleep(self.can_sleep)
            .build()
    }
}

/// Builder for creating colliders with common configurations
pub struct ColliderBuilder2D {
    shape: SharedShape,
    collision_groups: CollisionGroups,
    friction: Real,
}

impl ColliderBuilder2D {
    /// Create a box-shaped collider
    pub fn box_shape(half_width: Real, half_height: Real) -> Self {
        Self {
            shape: SharedShape::cuboid(half_width, half_height),
            collision_groups: CollisionGroups::Terrain,
            friction: 0.5,
        }
    }

    /// Set the collision groups for filtering
    pub fn collision_groups(mut self, groups: CollisionGroups) -> Self {
        self.collision_groups = groups;
        self
    }

    /// Set friction coefficient (0.0 = no friction, 1.0 = high friction)
    pub fn friction(mut self, friction: Real) -> Self {
        self.friction = friction;
        self
    }

    /// Build the collider
    pub fn build(self) -> Collider {
        ColliderBuilder::new(self.shape)
            .collision_groups(self.collision_groups.to_interaction_groups())
            .friction(self.friction)
            .build()
    }
}

/// Common configurations for level objects
pub mod presets {
    use super::*;

    /// Fixed body anchoring a strip of terrain, positioned at its center
    pub fn terrain_body(center_x: Real, center_y: Real) -> RigidBody {
        BodyBuilder::new_fixed().position(center_x, center_y).build()
    }

    /// Box collider covering a strip of terrain
    pub fn terrain_collider(width: Real, height: Real) -> Collider {
        ColliderBuilder2D::box_shape(width / 2.0, height / 2.0)
            .collision_groups(CollisionGroups::Terrain)
            .friction(0.0)
            .build()
    }

    /// Box shape swept through the world by the character controller
    pub fn character_shape(width: Real, height: Real) -> SharedShape {
        SharedShape::cuboid(width / 2.0, height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_builder_fixed() {
        let body = BodyBuilder::new_fixed().position(10.0, 20.0).build();

        assert_eq!(body.body_type(), RigidBodyType::Fixed);
        assert_eq!(body.translation().x, 10.0);
        assert_eq!(body.translation().y, 20.0);
    }

    #[test]
    fn test_terrain_collider() {
        let collider = presets::terrain_collider(256.0, 128.0);

        assert!(!collider.is_sensor());
        assert_eq!(collider.friction(), 0.0);
        let cuboid = collider.shape().as_cuboid().unwrap();
        assert_eq!(cuboid.half_extents.x, 128.0);
        assert_eq!(cuboid.half_extents.y, 64.0);
    }

    #[test]
    fn test_character_shape() {
        let shape = presets::character_shape(40.0, 80.0);
        let cuboid = shape.as_cuboid().unwrap();
        assert_eq!(cuboid.half_extents.x, 20.0);
        assert_eq!(cuboid.half_extents.y, 40.0);
    }
}
