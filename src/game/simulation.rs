// Per-tick simulation pipeline
//
// Order within a tick is fixed: queued input, physics, animation, camera.
// Rendering reads the result afterwards.

use crate::core::math::Rect;
use crate::engine::assets::FrameHandle;
use crate::engine::input::InputEvent;
use crate::engine::renderer::{Camera, SpriteDraw, Viewport};
use crate::game::characters::{AnimationError, Character, FrameRegistry};
use crate::game::controller::apply_input;
use crate::game::level::PlatformPhysics;

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    /// Frame to show for the character
    pub frame: FrameHandle,
    /// New viewport, only if the camera moved
    pub viewport: Option<Viewport>,
}

/// Owns all mutable world state and advances it one tick at a time
pub struct Simulation<P: PlatformPhysics> {
    character: Character,
    physics: P,
    registry: FrameRegistry,
    camera: Camera,
    /// Physics verdict from the last tick
    grounded: bool,
}

impl<P: PlatformPhysics> Simulation<P> {
    /// Resolve the character's first frame and frame the camera on it
    pub fn new(
        mut character: Character,
        physics: P,
        registry: FrameRegistry,
        mut camera: Camera,
    ) -> Result<Self, AnimationError> {
        let position = character.position();
        let velocity = character.velocity();
        character
            .animation
            .advance_frame(position, velocity, &registry)?;
        camera.update(character.bounds());

        Ok(Self {
            character,
            physics,
            registry,
            camera,
            grounded: false,
        })
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Run one tick with the input that arrived since the last one
    ///
    /// On error the stored character is left as it was before the tick.
    pub fn tick(&mut self, events: &[InputEvent]) -> Result<TickReport, AnimationError> {
        let mut character = self.character.clone();
        for event in events {
            character = apply_input(character, event, &self.physics);
        }

        let gravity = character.stats.gravity;
        let step = self.physics.integrate_and_resolve(character, gravity);
        let mut character = step.character;
        if step.grounded != self.grounded {
            log::debug!(
                "{} at {:?}",
                if step.grounded { "Landed" } else { "Left the ground" },
                character.position()
            );
        }

        let position = character.position();
        let velocity = character.velocity();
        character.animation.select_mode(velocity, character.running);
        let frame = character
            .animation
            .advance_frame(position, velocity, &self.registry)?;

        let viewport = self.camera.update(character.bounds());
        self.character = character;
        self.grounded = step.grounded;

        Ok(TickReport { frame, viewport })
    }

    /// The character's current frame, drawn at its scaled frame size
    pub fn character_sprite(&self) -> Option<SpriteDraw> {
        let frame = self.character.animation.current_frame()?;
        let size = self
            .registry
            .frame_size(frame)
            .map(|size| size * self.character.stats.scale)
            .unwrap_or(self.character.body.size);

        Some(SpriteDraw::new(
            frame,
            Rect::from_center(self.character.position(), size),
        ))
    }
}
