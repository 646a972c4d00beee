//! Scripted key presses for the headless driver.

use input::{ElementState, InputState, KeyCode};

/// Keys held until `until` seconds of simulated time.
#[derive(Debug, Clone)]
pub struct Leg {
    pub until: f32,
    pub keys: Vec<KeyCode>,
}

/// Plays a sequence of legs into an [`InputState`] as press/release events.
#[derive(Debug, Clone)]
pub struct Autopilot {
    legs: Vec<Leg>,
    held: Vec<KeyCode>,
}

impl Autopilot {
    pub fn new(legs: Vec<Leg>) -> Self {
        Self {
            legs,
            held: Vec::new(),
        }
    }

    /// Throttle up and raise the nose, bank and yaw through a turn, level
    /// out, then run the engine at full throttle until it overheats and
    /// throttle back until it recovers. Pitch keys assume the standard
    /// profile.
    pub fn climb_out() -> Self {
        let leg = |until: f32, keys: &[KeyCode]| Leg {
            until,
            keys: keys.to_vec(),
        };
        Self::new(vec![
            leg(3.0, &[KeyCode::ArrowUp]),
            leg(3.25, &[KeyCode::KeyS]),
            leg(6.0, &[]),
            leg(6.3, &[KeyCode::KeyD]),
            leg(9.0, &[KeyCode::KeyE]),
            leg(9.3, &[KeyCode::KeyA]),
            leg(9.55, &[KeyCode::KeyW]),
            leg(35.0, &[KeyCode::ArrowUp]),
            leg(90.0, &[KeyCode::ArrowDown]),
        ])
    }

    /// Keys the script wants held at `elapsed` seconds.
    pub fn keys_at(&self, elapsed: f32) -> &[KeyCode] {
        self.legs
            .iter()
            .find(|leg| elapsed < leg.until)
            .map(|leg| leg.keys.as_slice())
            .unwrap_or(&[])
    }

    /// Press what this leg needs, release what it does not.
    pub fn drive(&mut self, elapsed: f32, input: &mut InputState) {
        let wanted = self.keys_at(elapsed).to_vec();
        for key in self.held.iter().filter(|k| !wanted.contains(*k)) {
            input.process_keyboard(*key, ElementState::Released);
        }
        for key in &wanted {
            input.process_keyboard(*key, ElementState::Pressed);
        }
        self.held = wanted;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legs_switch_on_time() {
        let pilot = Autopilot::climb_out();
        assert_eq!(pilot.keys_at(0.0), &[KeyCode::ArrowUp]);
        assert_eq!(pilot.keys_at(3.1), &[KeyCode::KeyS]);
        assert!(pilot.keys_at(4.0).is_empty());
        assert_eq!(pilot.keys_at(7.0), &[KeyCode::KeyE]);
        assert!(pilot.keys_at(100.0).is_empty());
    }

    #[test]
    fn drive_releases_previous_leg() {
        let mut pilot = Autopilot::climb_out();
        let mut input = InputState::new();
        pilot.drive(1.0, &mut input);
        assert!(input.flight_controls().throttle_up);

        input.begin_frame();
        pilot.drive(3.1, &mut input);
        let controls = input.flight_controls();
        assert!(!controls.throttle_up);
        assert!(controls.pitch_down);
        assert!(input.is_key_released(KeyCode::ArrowUp));

        input.begin_frame();
        pilot.drive(500.0, &mut input);
        assert!(input.flight_controls().is_idle());
    }
}
