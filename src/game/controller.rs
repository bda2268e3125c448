// Input controller: turns key edges into character intent

use crate::engine::input::{Action, InputEvent, KeyState};
use crate::game::characters::{Character, ModeEvent};
use crate::game::level::PlatformPhysics;

/// Apply one input event to the character
///
/// Horizontal presses set the walk or run speed; releasing a direction stops
/// the character and restarts the walk cycle. A jump is only honoured when
/// the physics reports the character can jump.
pub fn apply_input<P>(mut character: Character, event: &InputEvent, physics: &P) -> Character
where
    P: PlatformPhysics + ?Sized,
{
    let stats = &character.stats;

    match (event.action, event.state) {
        (Action::MoveLeft | Action::MoveRight, KeyState::Pressed) => {
            let direction = if event.action == Action::MoveRight {
                1.0
            } else {
                -1.0
            };
            let speed = if event.run_held {
                stats.run_speed()
            } else {
                stats.speed
            };
            character.body.velocity.x = direction * speed;
            character.running = event.run_held;
        }
        (Action::MoveLeft | Action::MoveRight, KeyState::Released) => {
            character.body.velocity.x = 0.0;
            character.running = false;
            character.animation.restart_cycle();
        }
        (Action::Run, KeyState::Released) => {
            character.running = false;
        }
        (Action::Jump, KeyState::Pressed) => {
            if physics.can_jump(&character) {
                character.body.velocity.y = stats.jump_speed;
                character.animation.apply(ModeEvent::Jump);
            } else {
                log::debug!("Jump refused: not grounded");
            }
        }
        (Action::Die, KeyState::Pressed) => {
            character.animation.apply(ModeEvent::Die);
        }
        (Action::Run | Action::Jump | Action::Die, _) => {}
    }

    character
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::characters::{AnimationMode, BASE_STATS};
    use crate::game::level::PhysicsStep;
    use glam::Vec2;

    /// Physics stub with a fixed answer to `can_jump`
    struct Grounded(bool);

    impl PlatformPhysics for Grounded {
        fn integrate_and_resolve(&mut self, character: Character, _gravity: f32) -> PhysicsStep {
            PhysicsStep {
                grounded: self.0,
                character,
            }
        }

        fn can_jump(&self, _character: &Character) -> bool {
            self.0
        }
    }

    fn character() -> Character {
        Character::new(Vec2::new(800.0, 450.0), Vec2::new(100.0, 200.0), BASE_STATS)
    }

    #[test]
    fn test_press_right_walks() {
        let c = apply_input(character(), &InputEvent::pressed(Action::MoveRight, false), &Grounded(true));
        assert_eq!(c.velocity().x, 5.0);
        assert!(!c.running);
    }

    #[test]
    fn test_press_left_with_run_held() {
        let c = apply_input(character(), &InputEvent::pressed(Action::MoveLeft, true), &Grounded(true));
        assert_eq!(c.velocity().x, -7.5);
        assert!(c.running);
    }

    #[test]
    fn test_release_stops_and_clears_running() {
        let c = apply_input(character(), &InputEvent::pressed(Action::MoveLeft, true), &Grounded(true));
        let c = apply_input(c, &InputEvent::released(Action::MoveLeft, true), &Grounded(true));
        assert_eq!(c.velocity().x, 0.0);
        assert!(!c.running);
    }

    #[test]
    fn test_run_release_keeps_speed() {
        let c = apply_input(character(), &InputEvent::pressed(Action::MoveRight, true), &Grounded(true));
        let c = apply_input(c, &InputEvent::released(Action::Run, false), &Grounded(true));
        assert_eq!(c.velocity().x, 7.5);
        assert!(!c.running);
    }

    #[test]
    fn test_run_press_alone_does_nothing() {
        let c = apply_input(character(), &InputEvent::pressed(Action::Run, true), &Grounded(true));
        assert_eq!(c.velocity(), Vec2::ZERO);
        assert!(!c.running);
    }

    #[test]
    fn test_jump_when_grounded() {
        let c = apply_input(character(), &InputEvent::pressed(Action::Jump, false), &Grounded(true));
        assert_eq!(c.velocity().y, 17.0);
        assert_eq!(c.animation.mode(), AnimationMode::Jumping);
    }

    #[test]
    fn test_jump_refused_in_air() {
        let c = apply_input(character(), &InputEvent::pressed(Action::Jump, false), &Grounded(false));
        assert_eq!(c.velocity().y, 0.0);
        assert_eq!(c.animation.mode(), AnimationMode::Standing);
    }

    #[test]
    fn test_jump_while_dying_keeps_dying() {
        let c = apply_input(character(), &InputEvent::pressed(Action::Die, false), &Grounded(true));
        let c = apply_input(c, &InputEvent::pressed(Action::Jump, false), &Grounded(true));
        assert_eq!(c.velocity().y, 17.0);
        assert_eq!(c.animation.mode(), AnimationMode::Dying);
    }

    #[test]
    fn test_die_is_unconditional() {
        let c = apply_input(character(), &InputEvent::pressed(Action::Die, false), &Grounded(false));
        assert_eq!(c.animation.mode(), AnimationMode::Dying);
    }
}
