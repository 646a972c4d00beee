//! Types shared between the input, physics and game crates.

use glam::Vec3;

use crate::math::wrap_degrees;

/// Aircraft attitude in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Orientation {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

impl Orientation {
    pub fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Unit forward vector. Yaw 0 / pitch 0 points along +Z.
    ///
    /// This is the single heading convention: thrust and the chase camera
    /// both derive from it.
    pub fn heading(&self) -> Vec3 {
        let pitch = self.pitch.to_radians();
        let yaw = self.yaw.to_radians();
        Vec3::new(yaw.sin() * pitch.cos(), pitch.sin(), yaw.cos() * pitch.cos())
    }

    /// Wrap every angle into `[-180, 180)`.
    pub fn normalize(&mut self) {
        self.pitch = wrap_degrees(self.pitch);
        self.yaw = wrap_degrees(self.yaw);
        self.roll = wrap_degrees(self.roll);
    }
}

/// Discrete control state sampled once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlInput {
    pub pitch_up: bool,
    pub pitch_down: bool,
    pub roll_left: bool,
    pub roll_right: bool,
    pub yaw_left: bool,
    pub yaw_right: bool,
    pub throttle_up: bool,
    pub throttle_down: bool,
    pub reset: bool,
}

impl ControlInput {
    /// No keys held.
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }
}
