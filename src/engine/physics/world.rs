use rapier2d::control::{CharacterLength, EffectiveCharacterMovement, KinematicCharacterController};
use rapier2d::prelude::*;

/// Gap the character controller keeps between the moving shape and obstacles
const CONTROLLER_OFFSET: Real = 0.05;

/// Static collision world queried by a kinematic character controller
///
/// Level geometry never moves, so there is no dynamics pipeline: the world
/// holds fixed bodies, their colliders and a query pipeline that is refreshed
/// whenever geometry is added.
pub struct PhysicsWorld {
    /// Query pipeline for raycasts and shape casts
    query_pipeline: QueryPipeline,

    /// Rigid body set
    rigid_body_set: RigidBodySet,

    /// Collider set
    collider_set: ColliderSet,

    /// Slide-along-surfaces movement resolver
    controller: KinematicCharacterController,

    /// Duration of one simulation tick
    timestep: Real,
}

impl PhysicsWorld {
    pub fn new(timestep: Real) -> Self {
        let controller = KinematicCharacterController {
            offset: CharacterLength::Absolute(CONTROLLER_OFFSET),
            slide: true,
            autostep: None,
            snap_to_ground: None,
            ..KinematicCharacterController::default()
        };

        Self {
            query_pipeline: QueryPipeline::new(),
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            controller,
            timestep,
        }
    }

    /// Add a rigid body to the physics world
    pub fn add_rigid_body(&mut self, body: RigidBody) -> RigidBodyHandle {
        self.rigid_body_set.insert(body)
    }

    /// Add a collider attached to a rigid body
    pub fn add_collider(
        &mut self,
        collider: Collider,
        parent_handle: RigidBodyHandle,
    ) -> ColliderHandle {
        self.collider_set
            .insert_with_parent(collider, parent_handle, &mut self.rigid_body_set)
    }

    /// Rebuild the query acceleration structure after geometry changes
    pub fn refresh_queries(&mut self) {
        self.query_pipeline
            .update(&self.rigid_body_set, &self.collider_set);
    }

    /// Number of colliders in the world
    pub fn collider_count(&self) -> usize {
        self.collider_set.len()
    }

    /// Cast a ray and return the first hit
    pub fn raycast(
        &self,
        ray_origin: Vector<Real>,
        ray_dir: Vector<Real>,
        max_toi: Real,
        solid: bool,
        filter: QueryFilter,
    ) -> Option<(ColliderHandle, Real)> {
        let ray = Ray::new(point![ray_origin.x, ray_origin.y], ray_dir);
        self.query_pipeline.cast_ray(
            &self.rigid_body_set,
            &self.collider_set,
            &ray,
            max_toi,
            solid,
            filter,
        )
    }

    /// Sweep a shape from `center` by `desired`, sliding along whatever it hits
    pub fn move_shape(
        &self,
        shape: &SharedShape,
        center: Vector<Real>,
        desired: Vector<Real>,
        filter: QueryFilter,
    ) -> EffectiveCharacterMovement {
        self.controller.move_shape(
            self.timestep,
            &self.rigid_body_set,
            &self.collider_set,
            &self.query_pipeline,
            &**shape,
            &Isometry::translation(center.x, center.y),
            desired,
            filter,
            |_| {},
        )
    }

    /// Gap kept between a moved shape and the surface it rests on
    pub fn contact_offset(&self) -> Real {
        CONTROLLER_OFFSET
    }
}
