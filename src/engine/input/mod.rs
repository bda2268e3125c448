// Input handling system
//
// Keyboard events from winit are mapped to game actions and queued until the
// next simulation tick consumes them.
//
// ## Architecture
//
// - `action`: Defines game actions and default key bindings
// - `config`: Key binding configuration and remapping
// - `manager`: Event queue and held-key tracking

pub mod action;
pub mod config;
pub mod manager;

// Re-export commonly used types
pub use action::Action;
pub use manager::{InputEvent, InputManager, KeyState};
