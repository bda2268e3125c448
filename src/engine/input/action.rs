// Game action definitions and mappings

use winit::keyboard::KeyCode;

/// Represents all possible in-game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement
    MoveLeft,
    MoveRight,
    /// Modifier: held together with a direction to run
    Run,
    Jump,

    // Debug
    Die,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Self::MoveLeft,
        Self::MoveRight,
        Self::Run,
        Self::Jump,
        Self::Die,
    ];
}

/// Represents an input source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }
}

/// Default keyboard bindings
pub fn default_bindings() -> Vec<(InputSource, Action)> {
    vec![
        (InputSource::key(KeyCode::ArrowLeft), Action::MoveLeft),
        (InputSource::key(KeyCode::ArrowRight), Action::MoveRight),
        (InputSource::key(KeyCode::ShiftLeft), Action::Run),
        (InputSource::key(KeyCode::ShiftRight), Action::Run),
        (InputSource::key(KeyCode::Space), Action::Jump),
        (InputSource::key(KeyCode::KeyA), Action::Die),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_source_keyboard_creation() {
        let source = InputSource::key(KeyCode::Space);
        assert_eq!(source, InputSource::Keyboard(KeyCode::Space));
    }

    #[test]
    fn test_every_action_is_bound() {
        let bindings = default_bindings();
        for action in Action::ALL {
            assert!(
                bindings.iter().any(|(_, a)| *a == action),
                "{:?} has no default binding",
                action
            );
        }
    }

    #[test]
    fn test_no_duplicate_inputs() {
        let bindings = default_bindings();
        let mut seen_sources = std::collections::HashSet::new();
        for (source, _) in bindings {
            assert!(
                seen_sources.insert(source),
                "Duplicate input source found in default bindings"
            );
        }
    }
}
