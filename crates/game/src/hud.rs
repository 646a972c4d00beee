//! HUD telemetry: what the overlay shows, not how it is drawn.

use physics::AircraftState;

use crate::render::DrawMode;

const GREEN: [f32; 3] = [0.0, 0.8, 0.0];
const RED: [f32; 3] = [1.0, 0.0, 0.0];

/// Screen rectangle in pixels, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl BarRect {
    /// Portion of the bar filled from the bottom for `level` in `[0, 1]`.
    pub fn filled(&self, level: f32) -> BarRect {
        let fill = (self.height * level.clamp(0.0, 1.0)).floor();
        BarRect {
            x: self.x,
            y: self.y + self.height - fill,
            width: self.width,
            height: fill,
        }
    }
}

/// Positions of the two vertical gauges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudLayout {
    pub throttle_bar: BarRect,
    pub temperature_bar: BarRect,
    /// Centre of the overheat warning triangle.
    pub warning_center: (f32, f32),
    pub warning_size: f32,
}

impl HudLayout {
    /// Throttle gauge on the left, temperature on the right, each 60% of the
    /// viewport tall and vertically centred.
    pub fn for_viewport(width: u32, height: u32) -> Self {
        let bar_height = (height as f32 * 0.6).floor();
        let bar_y = ((height as f32 - bar_height) / 2.0).floor();
        let bar_width = 20.0;
        Self {
            throttle_bar: BarRect {
                x: 30.0,
                y: bar_y,
                width: bar_width,
                height: bar_height,
            },
            temperature_bar: BarRect {
                x: width as f32 - 50.0,
                y: bar_y,
                width: bar_width,
                height: bar_height,
            },
            warning_center: ((width / 2) as f32, 50.0),
            warning_size: 30.0,
        }
    }
}

/// Per-frame HUD values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudTelemetry {
    pub throttle: f32,
    pub throttle_color: [f32; 3],
    pub temperature: f32,
    pub temperature_color: [f32; 3],
    pub overheated: bool,
    /// The warning triangle blinks: on for the first half of every second.
    pub warning_visible: bool,
    /// The wireframe aircraft flashes red: first half of every 500 ms.
    pub aircraft_flash: bool,
    pub speed: f32,
    pub altitude: f32,
}

impl HudTelemetry {
    pub fn from_state(aircraft: &AircraftState, draw_mode: DrawMode, elapsed_seconds: f32) -> Self {
        let overheated = aircraft.is_overheated();
        let temperature = aircraft.engine_temperature();
        let millis = (elapsed_seconds.max(0.0) * 1000.0) as u64;

        Self {
            throttle: aircraft.throttle(),
            throttle_color: if overheated { RED } else { GREEN },
            temperature,
            temperature_color: temperature_color(temperature),
            overheated,
            warning_visible: overheated && millis % 1000 < 500,
            aircraft_flash: overheated && draw_mode == DrawMode::Wireframe && millis % 500 < 250,
            speed: aircraft.speed(),
            altitude: aircraft.position.y,
        }
    }
}

/// Green when cold, through yellow, to red when hot.
pub fn temperature_color(temperature: f32) -> [f32; 3] {
    [
        (temperature * 2.0).min(1.0),
        (1.0 - temperature * 1.5).max(0.0),
        0.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use physics::FlightParams;

    #[test]
    fn temperature_color_ramp() {
        assert_eq!(temperature_color(0.0), [0.0, 1.0, 0.0]);
        assert_eq!(temperature_color(1.0), [1.0, 0.0, 0.0]);
        let mid = temperature_color(0.4);
        assert!((mid[0] - 0.8).abs() < 1e-6);
        assert!((mid[1] - 0.4).abs() < 1e-6);
    }

    #[test]
    fn nominal_engine_shows_green_throttle() {
        let aircraft = AircraftState::spawn(&FlightParams::default());
        let hud = HudTelemetry::from_state(&aircraft, DrawMode::Wireframe, 0.1);
        assert_eq!(hud.throttle, 0.5);
        assert_eq!(hud.throttle_color, GREEN);
        assert!(!hud.warning_visible);
        assert!(!hud.aircraft_flash);
        assert_eq!(hud.altitude, 10.0);
    }

    #[test]
    fn overheat_warning_blinks() {
        let params = FlightParams::default();
        let mut aircraft = AircraftState::spawn(&params);
        aircraft.engine_mut().set_temperature(0.9, &params.engine);

        let on = HudTelemetry::from_state(&aircraft, DrawMode::Wireframe, 3.2);
        assert_eq!(on.throttle_color, RED);
        assert!(on.warning_visible);
        assert!(on.aircraft_flash);

        let off = HudTelemetry::from_state(&aircraft, DrawMode::Wireframe, 3.7);
        assert!(!off.warning_visible);
        assert!(on.overheated && off.overheated);

        let solid = HudTelemetry::from_state(&aircraft, DrawMode::Solid, 3.2);
        assert!(!solid.aircraft_flash);
    }

    #[test]
    fn layout_for_1024x768() {
        let layout = HudLayout::for_viewport(1024, 768);
        assert_eq!(layout.throttle_bar.height, 460.0);
        assert_eq!(layout.throttle_bar.y, 154.0);
        assert_eq!(layout.temperature_bar.x, 974.0);
        assert_eq!(layout.warning_center, (512.0, 50.0));

        let half = layout.throttle_bar.filled(0.5);
        assert_eq!(half.height, 230.0);
        assert_eq!(half.y + half.height, layout.throttle_bar.y + layout.throttle_bar.height);
        assert_eq!(layout.throttle_bar.filled(2.0).height, 460.0);
    }
}
