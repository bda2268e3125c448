// Animation mode state machine

use std::fmt;

/// Direction the character sprite faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Left-facing frames are the source images flipped horizontally
    pub fn is_mirrored(&self) -> bool {
        matches!(self, Self::Left)
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// Family of frames a mode draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationCategory {
    Stand,
    Walk,
    Run,
    Jump,
    Die,
}

impl AnimationCategory {
    pub const ALL: [AnimationCategory; 5] = [
        Self::Stand,
        Self::Walk,
        Self::Run,
        Self::Jump,
        Self::Die,
    ];

    /// Directory under `images/` holding this category's frames
    pub fn directory_name(&self) -> &'static str {
        match self {
            Self::Stand => "stand",
            Self::Walk => "walk",
            Self::Run => "run",
            Self::Jump => "jump",
            Self::Die => "die",
        }
    }
}

impl fmt::Display for AnimationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.directory_name())
    }
}

/// What the character is currently animating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationMode {
    /// No motion, static pose
    #[default]
    Standing,
    /// Distance-driven walk cycle
    Walking,
    /// Distance-driven run cycle with a longer stride
    Running,
    /// Timed, plays once
    Jumping,
    /// Timed, plays once
    Dying,
}

/// Something that can move the state machine to another mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeEvent {
    /// Character has non-zero velocity
    Move { running: bool },
    /// Character has zero velocity
    Halt,
    Jump,
    Die,
    /// A timed sequence played through its last frame
    SequenceFinished,
}

impl AnimationMode {
    pub fn category(&self) -> AnimationCategory {
        match self {
            Self::Standing => AnimationCategory::Stand,
            Self::Walking => AnimationCategory::Walk,
            Self::Running => AnimationCategory::Run,
            Self::Jumping => AnimationCategory::Jump,
            Self::Dying => AnimationCategory::Die,
        }
    }

    /// Modes whose frame advance is driven by distance travelled
    pub fn is_locomotion(&self) -> bool {
        matches!(self, Self::Standing | Self::Walking | Self::Running)
    }

    /// Next mode after `event`
    ///
    /// Priority is dying, then jumping, then running, then walking or
    /// standing. A timed mode only gives way to a higher-priority one or to
    /// the end of its own sequence.
    pub fn transition(self, event: ModeEvent) -> Self {
        match (self, event) {
            (Self::Dying, ModeEvent::SequenceFinished) => Self::Standing,
            (Self::Dying, _) => Self::Dying,

            (Self::Jumping, ModeEvent::Die) => Self::Dying,
            (Self::Jumping, ModeEvent::SequenceFinished) => Self::Standing,
            (Self::Jumping, _) => Self::Jumping,

            (_, ModeEvent::Die) => Self::Dying,
            (_, ModeEvent::Jump) => Self::Jumping,
            (_, ModeEvent::Move { running: true }) => Self::Running,
            (_, ModeEvent::Move { running: false }) => Self::Walking,
            (_, ModeEvent::Halt) => Self::Standing,
            (mode, ModeEvent::SequenceFinished) => mode,
        }
    }
}
