// Character stats
//
// Movement units are world units per tick; the simulation runs at a fixed
// tick rate so there is no delta time anywhere in the character code.

use super::animation::AnimationTuning;

/// Fixed movement and animation tuning for the playable character
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterStats {
    // Movement
    /// Horizontal speed while walking
    pub speed: f32,
    /// Speed multiplier while the run modifier is held
    pub run_multiplier: f32,
    /// Vertical velocity given by a jump
    pub jump_speed: f32,

    // Physics
    /// Subtracted from vertical velocity every tick
    pub gravity: f32,

    // Animation
    /// World units travelled per walk frame
    pub delta_distance: f32,
    /// Run frames need this many times `delta_distance`
    pub run_stride_factor: f32,
    /// Sprite and collision box scale relative to the source frames
    pub scale: f32,
}

pub const BASE_STATS: CharacterStats = CharacterStats {
    speed: 5.0,
    run_multiplier: 1.5,
    jump_speed: 17.0,

    gravity: 0.5,

    delta_distance: 20.0,
    run_stride_factor: 2.2,
    scale: 0.8,
};

impl Default for CharacterStats {
    fn default() -> Self {
        BASE_STATS
    }
}

impl CharacterStats {
    pub fn run_speed(&self) -> f32 {
        self.speed * self.run_multiplier
    }

    /// Frame cadence derived from these stats
    pub fn animation_tuning(&self) -> AnimationTuning {
        AnimationTuning {
            delta_distance: self.delta_distance,
            run_stride_factor: self.run_stride_factor,
            ..AnimationTuning::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stats() {
        let stats = CharacterStats::default();
        assert_eq!(stats.speed, 5.0);
        assert_eq!(stats.jump_speed, 17.0);
        assert_eq!(stats.gravity, 0.5);
        assert_eq!(stats.run_speed(), 7.5);
    }

    #[test]
    fn test_animation_tuning() {
        let tuning = BASE_STATS.animation_tuning();
        assert_eq!(tuning.delta_distance, 20.0);
        assert_eq!(tuning.run_stride_factor, 2.2);
        assert_eq!(tuning.timed_step, 5);
        assert_eq!(tuning.timed_threshold, 17);
    }
}
