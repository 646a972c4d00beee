//! Keyboard state and the key bindings for flying.

use engine_core::ControlInput;
use std::collections::HashSet;

/// Key bindings for the flight controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    pub pitch_up: KeyCode,
    pub pitch_down: KeyCode,
    pub roll_left: KeyCode,
    pub roll_right: KeyCode,
    pub yaw_left: KeyCode,
    pub yaw_right: KeyCode,
    pub throttle_up: KeyCode,
    pub throttle_down: KeyCode,
    pub reset: KeyCode,
    pub toggle_draw_mode: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            pitch_up: KeyCode::KeyW,
            pitch_down: KeyCode::KeyS,
            roll_left: KeyCode::KeyA,
            roll_right: KeyCode::KeyD,
            yaw_left: KeyCode::KeyQ,
            yaw_right: KeyCode::KeyE,
            throttle_up: KeyCode::ArrowUp,
            throttle_down: KeyCode::ArrowDown,
            reset: KeyCode::KeyR,
            toggle_draw_mode: KeyCode::Tab,
        }
    }
}

/// Keyboard state for the current frame.
#[derive(Debug, Default)]
pub struct InputState {
    /// Keys currently held down.
    keys_held: HashSet<KeyCode>,
    /// Keys pressed this frame.
    keys_pressed: HashSet<KeyCode>,
    /// Keys released this frame.
    keys_released: HashSet<KeyCode>,
    bindings: KeyBindings,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            ..Default::default()
        }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Clear per-frame state. Call at the start of each frame.
    pub fn begin_frame(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
    }

    /// Process a keyboard event.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if !self.keys_held.contains(&key) {
                    self.keys_pressed.insert(key);
                }
                self.keys_held.insert(key);
            }
            ElementState::Released => {
                if self.keys_held.remove(&key) {
                    self.keys_released.insert(key);
                }
            }
        }
    }

    /// Release every held key (e.g. on focus loss).
    pub fn release_all(&mut self) {
        self.keys_released.extend(self.keys_held.drain());
    }

    /// Check if a key is currently held.
    pub fn is_key_held(&self, key: KeyCode) -> bool {
        self.keys_held.contains(&key)
    }

    /// Check if a key was pressed this frame.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Check if a key was released this frame.
    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.keys_released.contains(&key)
    }

    /// Sample the held flight keys.
    pub fn flight_controls(&self) -> ControlInput {
        let b = &self.bindings;
        ControlInput {
            pitch_up: self.is_key_held(b.pitch_up),
            pitch_down: self.is_key_held(b.pitch_down),
            roll_left: self.is_key_held(b.roll_left),
            roll_right: self.is_key_held(b.roll_right),
            yaw_left: self.is_key_held(b.yaw_left),
            yaw_right: self.is_key_held(b.yaw_right),
            throttle_up: self.is_key_held(b.throttle_up),
            throttle_down: self.is_key_held(b.throttle_down),
            reset: self.is_key_held(b.reset),
        }
    }

    /// Tab: one-shot per press.
    pub fn is_draw_mode_toggle_pressed(&self) -> bool {
        self.is_key_pressed(self.bindings.toggle_draw_mode)
    }
}

// Re-export for convenience
pub use winit::event::ElementState;
pub use winit::keyboard::KeyCode;
