// Input manager - turns raw key events into queued game input events

use super::action::{Action, InputSource};
use super::config::InputConfig;
use std::collections::{HashSet, VecDeque};
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Whether a bound key went down or up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// One action edge, stamped with the run modifier state at the time it happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub action: Action,
    pub state: KeyState,
    pub run_held: bool,
}

impl InputEvent {
    pub fn pressed(action: Action, run_held: bool) -> Self {
        Self {
            action,
            state: KeyState::Pressed,
            run_held,
        }
    }

    pub fn released(action: Action, run_held: bool) -> Self {
        Self {
            action,
            state: KeyState::Released,
            run_held,
        }
    }
}

/// Collects key events between ticks
///
/// Events are queued in arrival order and consumed by the simulation at the
/// start of the next tick, before physics runs. An action counts as held while
/// any key bound to it is down, so with two keys on one action only the first
/// press and the last release are reported.
#[derive(Debug)]
pub struct InputManager {
    config: InputConfig,

    /// Bound keys currently down
    held_keys: HashSet<KeyCode>,

    /// Events not yet consumed by a tick
    pending: VecDeque<InputEvent>,
}

impl InputManager {
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            held_keys: HashSet::new(),
            pending: VecDeque::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if event.repeat {
            return;
        }

        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.process_key(key_code, event.state == ElementState::Pressed);
        }
    }

    /// Queue the action bound to a key, if any
    pub fn process_key(&mut self, key_code: KeyCode, pressed: bool) {
        let Some(action) = self.config.get_action(InputSource::key(key_code)) else {
            return;
        };

        if pressed {
            let was_held = self.is_held(action);
            if self.held_keys.insert(key_code) && !was_held {
                self.push(InputEvent::pressed(action, self.run_held()));
            }
        } else if self.held_keys.remove(&key_code) && !self.is_held(action) {
            self.push(InputEvent::released(action, self.run_held()));
        }
    }

    /// Whether the run modifier is currently down
    fn run_held(&self) -> bool {
        self.is_held(Action::Run)
    }

    /// Whether any key bound to `action` is down
    fn is_held(&self, action: Action) -> bool {
        self.config
            .get_sources(action)
            .iter()
            .any(|source| match source {
                InputSource::Keyboard(code) => self.held_keys.contains(code),
            })
    }

    fn push(&mut self, event: InputEvent) {
        log::trace!("Queued input {:?}", event);
        self.pending.push_back(event);
    }

    /// Take every queued event, oldest first
    pub fn drain(&mut self) -> Vec<InputEvent> {
        self.pending.drain(..).collect()
    }

    /// Release every held action (e.g. when the window loses focus)
    ///
    /// Key-up events for these keys may never arrive, so the releases are
    /// queued behind whatever is already pending.
    pub fn reset(&mut self) {
        let held: Vec<Action> = Action::ALL
            .into_iter()
            .filter(|&action| self.is_held(action))
            .collect();
        self.held_keys.clear();

        for action in held {
            self.push(InputEvent::released(action, false));
        }
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new(InputConfig::default())
    }
}
