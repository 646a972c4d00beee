//! Simplified lift/drag/thrust flight model.
//!
//! One call to [`AircraftState::integrate`] is one simulation tick. Velocity
//! is expressed in world units per tick and is applied to position without
//! `dt` scaling; only the engine thermal model and control rates use `dt`.

use engine_core::{clamp_unit, ControlInput, Orientation};
use glam::Vec3;

use crate::engine::{EngineParams, EngineState, EngineThermal};

/// Control rates are authored per 60 Hz step.
const CONTROL_STEP_HZ: f32 = 60.0;

/// Flight model constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightParams {
    pub lift_coefficient: f32,
    /// Quadratic drag per axis.
    pub drag_coefficient: f32,
    /// Downward velocity change per tick.
    pub gravity: f32,
    /// Velocity change per tick at full throttle with a nominal engine.
    pub thrust_gain: f32,
    /// Sign applied to pitch-up input. `-1.0` means holding pitch-up
    /// decreases the pitch angle.
    pub pitch_sign: f32,
    /// Degrees per step.
    pub pitch_rate: f32,
    /// Degrees per step.
    pub roll_rate: f32,
    /// Degrees per step.
    pub yaw_rate: f32,
    /// Throttle fraction per step.
    pub throttle_rate: f32,
    /// Position restored by the reset command.
    pub spawn_position: Vec3,
    pub engine: EngineParams,
}

impl Default for FlightParams {
    fn default() -> Self {
        Self {
            lift_coefficient: 0.008,
            drag_coefficient: 0.008,
            gravity: 0.01,
            thrust_gain: 0.02,
            pitch_sign: -1.0,
            pitch_rate: 1.0,
            roll_rate: 1.5,
            yaw_rate: 1.0,
            throttle_rate: 0.01,
            spawn_position: Vec3::new(0.0, 10.0, 0.0),
            engine: EngineParams::default(),
        }
    }
}

/// Kinematic and engine state of the aircraft.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AircraftState {
    pub position: Vec3,
    pub orientation: Orientation,
    /// World units per tick.
    pub velocity: Vec3,
    throttle: f32,
    engine: EngineThermal,
}

impl Default for AircraftState {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Orientation::default(),
            velocity: Vec3::ZERO,
            throttle: 0.0,
            engine: EngineThermal::new(),
        }
    }
}

impl AircraftState {
    /// Launch state: above the spawn point, moving forward at half throttle.
    pub fn spawn(params: &FlightParams) -> Self {
        Self {
            position: params.spawn_position,
            velocity: Vec3::new(0.0, 0.0, 2.0),
            throttle: 0.5,
            ..Default::default()
        }
    }

    pub fn throttle(&self) -> f32 {
        self.throttle
    }

    /// Set the throttle, clamped to `[0, 1]`.
    pub fn set_throttle(&mut self, throttle: f32) {
        self.throttle = clamp_unit(throttle);
    }

    pub fn engine(&self) -> &EngineThermal {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut EngineThermal {
        &mut self.engine
    }

    pub fn engine_temperature(&self) -> f32 {
        self.engine.temperature()
    }

    pub fn is_overheated(&self) -> bool {
        self.engine.is_overheated()
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Apply one tick of held controls. Rates are scaled by `dt * 60` so the
    /// feel does not depend on frame rate.
    pub fn apply_controls(&mut self, input: &ControlInput, params: &FlightParams, dt: f32) {
        let step = dt * CONTROL_STEP_HZ;
        let o = &mut self.orientation;

        if input.pitch_up {
            o.pitch += params.pitch_sign * params.pitch_rate * step;
        }
        if input.pitch_down {
            o.pitch -= params.pitch_sign * params.pitch_rate * step;
        }
        if input.roll_left {
            o.roll -= params.roll_rate * step;
        }
        if input.roll_right {
            o.roll += params.roll_rate * step;
        }
        if input.yaw_left {
            o.yaw -= params.yaw_rate * step;
        }
        if input.yaw_right {
            o.yaw += params.yaw_rate * step;
        }
        o.normalize();

        if input.throttle_up {
            self.set_throttle(self.throttle + params.throttle_rate * step);
        }
        if input.throttle_down {
            self.set_throttle(self.throttle - params.throttle_rate * step);
        }

        if input.reset {
            self.reset(params);
        }
    }

    /// Return to the spawn point, level, stopped, idle and cold.
    pub fn reset(&mut self, params: &FlightParams) {
        self.position = params.spawn_position;
        self.orientation = Orientation::default();
        self.velocity = Vec3::ZERO;
        self.throttle = 0.0;
        self.engine.reset();
        log::info!("Aircraft reset to {}", self.position);
    }

    /// Lift for the current attitude and speed. Vanishes past ±90° pitch and
    /// falls off with bank.
    pub fn lift(&self, params: &FlightParams) -> f32 {
        let pitch = self.orientation.pitch.to_radians();
        let roll = self.orientation.roll.to_radians();
        params.lift_coefficient * self.speed() * pitch.cos().max(0.0) * roll.cos()
    }

    /// Advance one tick. Returns the new engine state if the overheat latch
    /// flipped.
    pub fn integrate(&mut self, params: &FlightParams, dt: f32) -> Option<EngineState> {
        let direction = self.orientation.heading();
        let lift = self.lift(params);
        let thrust = self.throttle * self.engine.thrust_scale(&params.engine) * params.thrust_gain;

        let mut velocity = self.velocity + direction * thrust;
        velocity.y += lift - params.gravity;
        velocity -= params.drag_coefficient * velocity * velocity.abs();
        self.velocity = velocity;

        // Semi-implicit Euler: the updated velocity moves the aircraft this tick.
        self.position += self.velocity;

        self.engine.update(self.throttle, dt, &params.engine)
    }
}
