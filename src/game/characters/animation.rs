// Character animation system
//
// Each tick the state machine first picks a mode from the character's motion
// (`select_mode`), then works out which frame to show (`advance_frame`).
// Walking and running advance by distance travelled; jumping and dying advance
// on a fixed tick cadence and play through once.

use super::frames::FrameRegistry;
use super::state::{AnimationCategory, AnimationMode, Facing, ModeEvent};
use crate::engine::assets::FrameHandle;
use glam::Vec2;

/// Slack for floating point drift when comparing travelled distance
const DISTANCE_EPSILON: f32 = 1e-3;

/// Animation configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AnimationError {
    #[error("No {category} frames registered for facing {facing}")]
    MissingFrames {
        category: AnimationCategory,
        facing: Facing,
    },
}

/// Knobs controlling frame cadence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationTuning {
    /// World units travelled per walk frame
    pub delta_distance: f32,
    /// Run frames need this many times the walk distance
    pub run_stride_factor: f32,
    /// Added to the timed-mode counter every tick
    pub timed_step: u32,
    /// Counter value at which a timed mode advances a frame
    pub timed_threshold: u32,
}

impl Default for AnimationTuning {
    fn default() -> Self {
        Self {
            delta_distance: 20.0,
            run_stride_factor: 2.2,
            timed_step: 5,
            timed_threshold: 17,
        }
    }
}

/// Motion-derived visual state of one character
#[derive(Debug, Clone)]
pub struct AnimationState {
    mode: AnimationMode,
    facing: Facing,
    frame_index: usize,
    /// Position at the last distance-driven frame change
    anchor: Vec2,
    /// Counter for timed modes
    timer: u32,
    /// A jump that death took over; it plays once the death sequence ends
    jump_pending: bool,
    current: Option<FrameHandle>,
    tuning: AnimationTuning,
}

impl AnimationState {
    pub fn new(position: Vec2, tuning: AnimationTuning) -> Self {
        Self {
            mode: AnimationMode::default(),
            facing: Facing::default(),
            frame_index: 0,
            anchor: position,
            timer: 0,
            jump_pending: false,
            current: None,
            tuning,
        }
    }

    pub fn mode(&self) -> AnimationMode {
        self.mode
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    /// Frame chosen by the last `advance_frame`
    pub fn current_frame(&self) -> Option<FrameHandle> {
        self.current
    }

    pub fn is_dead(&self) -> bool {
        self.mode == AnimationMode::Dying
    }

    pub fn is_jumping(&self) -> bool {
        self.mode == AnimationMode::Jumping
    }

    /// Feed an event into the state machine
    ///
    /// Entering a different mode restarts its frame index and timer. Death
    /// outranks a jump without cancelling it: a jump that was playing or
    /// requested during death starts over when the death sequence ends.
    pub fn apply(&mut self, event: ModeEvent) {
        let mut next = self.mode.transition(event);
        if (self.is_jumping() && event == ModeEvent::Die)
            || (self.is_dead() && event == ModeEvent::Jump)
        {
            self.jump_pending = true;
        } else if self.is_dead() && event == ModeEvent::SequenceFinished && self.jump_pending {
            self.jump_pending = false;
            next = AnimationMode::Jumping;
        }

        if next != self.mode {
            log::debug!("Animation {:?} -> {:?} on {:?}", self.mode, next, event);
            self.mode = next;
            self.frame_index = 0;
            self.timer = 0;
        }
    }

    /// Pick the mode for this tick from the character's motion
    pub fn select_mode(&mut self, velocity: Vec2, running: bool) {
        let event = if velocity == Vec2::ZERO {
            ModeEvent::Halt
        } else {
            ModeEvent::Move { running }
        };
        self.apply(event);
    }

    /// Restart the walk or run cycle from its first frame
    pub fn restart_cycle(&mut self) {
        if self.mode.is_locomotion() {
            self.frame_index = 0;
        }
    }

    /// Work out this tick's frame
    pub fn advance_frame(
        &mut self,
        position: Vec2,
        velocity: Vec2,
        registry: &FrameRegistry,
    ) -> Result<FrameHandle, AnimationError> {
        let flipped = self.update_facing(velocity, registry);

        let frame = match self.mode {
            AnimationMode::Standing => self.standing_frame(registry)?,
            AnimationMode::Walking | AnimationMode::Running => {
                self.advance_by_distance(position, flipped, registry)?
            }
            AnimationMode::Jumping | AnimationMode::Dying => self.advance_by_time(registry)?,
        };

        self.current = Some(frame);
        Ok(frame)
    }

    /// Turn around if moving horizontally on level ground and the new facing
    /// has frames for the current mode
    fn update_facing(&mut self, velocity: Vec2, registry: &FrameRegistry) -> bool {
        if velocity.y != 0.0 {
            return false;
        }

        let wanted = if velocity.x > 0.0 {
            Facing::Right
        } else if velocity.x < 0.0 {
            Facing::Left
        } else {
            return false;
        };

        if wanted == self.facing || !registry.has_frames(self.mode.category(), wanted) {
            return false;
        }

        log::trace!("Facing {} -> {}", self.facing, wanted);
        self.facing = wanted;
        true
    }

    fn standing_frame(&mut self, registry: &FrameRegistry) -> Result<FrameHandle, AnimationError> {
        self.frame_index = 0;
        first_frame(registry, AnimationCategory::Stand, self.facing)
    }

    fn advance_by_distance(
        &mut self,
        position: Vec2,
        flipped: bool,
        registry: &FrameRegistry,
    ) -> Result<FrameHandle, AnimationError> {
        let sequence = registry.sequence(self.mode.category(), self.facing)?;

        let threshold = match self.mode {
            AnimationMode::Running => self.tuning.delta_distance * self.tuning.run_stride_factor,
            _ => self.tuning.delta_distance,
        };

        let travelled = position.distance(self.anchor);
        if flipped || travelled + DISTANCE_EPSILON >= threshold {
            self.anchor = position;
            self.frame_index += 1;
        }
        self.frame_index %= sequence.len();

        sequence
            .get(self.frame_index)
            .ok_or(AnimationError::MissingFrames {
                category: self.mode.category(),
                facing: self.facing,
            })
    }

    fn advance_by_time(&mut self, registry: &FrameRegistry) -> Result<FrameHandle, AnimationError> {
        let category = self.mode.category();
        let sequence = registry.sequence(category, self.facing)?;
        // A facing change may land on a shorter sequence
        if self.frame_index >= sequence.len() {
            self.frame_index = 0;
        }

        self.timer += self.tuning.timed_step;
        if self.timer < self.tuning.timed_threshold {
            return sequence.get(self.frame_index).ok_or(AnimationError::MissingFrames {
                category,
                facing: self.facing,
            });
        }

        self.timer = 0;
        self.frame_index += 1;
        if self.frame_index < sequence.len() {
            return sequence.get(self.frame_index).ok_or(AnimationError::MissingFrames {
                category,
                facing: self.facing,
            });
        }

        // Played through once; show the next mode's first frame this tick
        self.apply(ModeEvent::SequenceFinished);
        match self.mode {
            AnimationMode::Jumping => first_frame(registry, AnimationCategory::Jump, self.facing),
            _ => self.standing_frame(registry),
        }
    }
}

fn first_frame(
    registry: &FrameRegistry,
    category: AnimationCategory,
    facing: Facing,
) -> Result<FrameHandle, AnimationError> {
    registry
        .sequence(category, facing)?
        .get(0)
        .ok_or(AnimationError::MissingFrames { category, facing })
}
