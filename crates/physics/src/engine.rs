//! Engine thermal model with an overheat hysteresis latch.

use engine_core::clamp_unit;

/// Latch state of the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EngineState {
    #[default]
    Nominal,
    /// Thrust is derated until the temperature falls through the recovery band.
    Overheated,
}

/// Thermal tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineParams {
    /// Temperature at or above which the engine latches overheated.
    pub overheat_threshold: f32,
    /// Fraction of the threshold the temperature must drop below to recover.
    pub recovery_ratio: f32,
    /// Heating per second at full throttle.
    pub heating_rate: f32,
    /// Cooling per second at or below half throttle.
    pub cooling_rate: f32,
    /// Thrust multiplier while overheated.
    pub overheat_thrust_scale: f32,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            overheat_threshold: 0.8,
            recovery_ratio: 0.7,
            heating_rate: 0.03,
            cooling_rate: 0.01,
            overheat_thrust_scale: 0.5,
        }
    }
}

impl EngineParams {
    /// Temperature below which an overheated engine recovers.
    pub fn recovery_threshold(&self) -> f32 {
        self.overheat_threshold * self.recovery_ratio
    }
}

/// Engine temperature in `[0, 1]` plus the overheat latch.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EngineThermal {
    temperature: f32,
    state: EngineState,
}

impl EngineThermal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_overheated(&self) -> bool {
        self.state == EngineState::Overheated
    }

    /// Multiplier applied to throttle when computing thrust.
    pub fn thrust_scale(&self, params: &EngineParams) -> f32 {
        match self.state {
            EngineState::Nominal => 1.0,
            EngineState::Overheated => params.overheat_thrust_scale,
        }
    }

    /// Heat above half throttle, cool otherwise, then evaluate the latch.
    /// Returns the new state if the latch flipped.
    pub fn update(&mut self, throttle: f32, dt: f32, params: &EngineParams) -> Option<EngineState> {
        let next = if throttle > 0.5 {
            self.temperature + params.heating_rate * (throttle - 0.5) * 2.0 * dt
        } else {
            self.temperature - params.cooling_rate * dt
        };
        self.set_temperature(next, params)
    }

    /// Force the temperature (clamped) and evaluate the latch.
    pub fn set_temperature(
        &mut self,
        temperature: f32,
        params: &EngineParams,
    ) -> Option<EngineState> {
        self.temperature = clamp_unit(temperature);
        self.evaluate(params)
    }

    /// Back to cold and nominal.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn evaluate(&mut self, params: &EngineParams) -> Option<EngineState> {
        let next = match self.state {
            EngineState::Nominal if self.temperature >= params.overheat_threshold => {
                EngineState::Overheated
            }
            EngineState::Overheated if self.temperature < params.recovery_threshold() => {
                EngineState::Nominal
            }
            state => state,
        };
        if next == self.state {
            return None;
        }
        self.state = next;
        match next {
            EngineState::Overheated => {
                log::warn!("Engine overheated at {:.3}, thrust derated", self.temperature)
            }
            EngineState::Nominal => {
                log::info!("Engine recovered at {:.3}", self.temperature)
            }
        }
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_trips_latch() {
        let params = EngineParams::default();
        let mut engine = EngineThermal::new();
        assert_eq!(engine.set_temperature(0.79, &params), None);
        assert_eq!(engine.set_temperature(0.8, &params), Some(EngineState::Overheated));
        assert!(engine.is_overheated());
    }

    #[test]
    fn latch_holds_through_dead_band() {
        let params = EngineParams::default();
        let mut engine = EngineThermal::new();
        engine.set_temperature(0.8, &params);
        for t in [0.79, 0.7, 0.6, 0.57, 0.56] {
            assert_eq!(engine.set_temperature(t, &params), None);
            assert!(engine.is_overheated(), "should stay overheated at {}", t);
        }
        assert_eq!(engine.set_temperature(0.559, &params), Some(EngineState::Nominal));
        assert!(!engine.is_overheated());
    }

    #[test]
    fn nominal_engine_ignores_dead_band() {
        let params = EngineParams::default();
        let mut engine = EngineThermal::new();
        engine.set_temperature(0.7, &params);
        assert_eq!(engine.state(), EngineState::Nominal);
    }

    #[test]
    fn thrust_is_derated_while_overheated() {
        let params = EngineParams::default();
        let mut engine = EngineThermal::new();
        assert_eq!(engine.thrust_scale(&params), 1.0);
        engine.set_temperature(0.9, &params);
        assert_eq!(engine.thrust_scale(&params), 0.5);
    }

    #[test]
    fn full_throttle_heats_half_throttle_cools() {
        let params = EngineParams::default();
        let mut engine = EngineThermal::new();
        engine.update(1.0, 1.0, &params);
        assert!((engine.temperature() - 0.03).abs() < 1e-6);
        engine.update(0.5, 1.0, &params);
        assert!((engine.temperature() - 0.02).abs() < 1e-6);
    }

    #[test]
    fn temperature_is_clamped() {
        let params = EngineParams::default();
        let mut engine = EngineThermal::new();
        engine.update(0.0, 10.0, &params);
        assert_eq!(engine.temperature(), 0.0);
        engine.update(1.0, 1000.0, &params);
        assert_eq!(engine.temperature(), 1.0);
        assert!(engine.is_overheated());
    }

    #[test]
    fn reset_clears_latch() {
        let params = EngineParams::default();
        let mut engine = EngineThermal::new();
        engine.set_temperature(1.0, &params);
        engine.reset();
        assert_eq!(engine.temperature(), 0.0);
        assert_eq!(engine.state(), EngineState::Nominal);
    }
}
