//! Faultline headless driver: flies a scripted sortie at a fixed tick rate
//! and logs telemetry in place of drawing.

use anyhow::Result;
use engine_core::FrameClock;
use game::{Autopilot, Renderer, SimConfig, Simulation, TelemetryLogger};
use input::InputState;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SimConfig::load();
    log::info!("Starting Faultline Flight ({:?} profile)", config.profile);

    let mut sim = Simulation::new(&config);
    let mut input = InputState::new();
    let mut clock = FrameClock::with_fixed_rate(config.fixed_rate_hz);
    let mut renderer = TelemetryLogger::new(config.telemetry_interval);
    let mut autopilot = Autopilot::climb_out();

    let step = clock.fixed_timestep();
    let total_frames = (f64::from(config.run_seconds) * config.fixed_rate_hz).round() as u64;
    let mut window_moves = 0u64;
    let mut overheats = 0u64;

    for _ in 0..total_frames {
        input.begin_frame();
        autopilot.drive(clock.elapsed_seconds(), &mut input);
        let dt = clock.advance(step);

        if input.is_draw_mode_toggle_pressed() {
            sim.toggle_draw_mode();
        }

        let report = sim.tick(&input.flight_controls(), dt);
        if report.terrain.moved() {
            window_moves += 1;
        }
        if report.engine == Some(physics::EngineState::Overheated) {
            overheats += 1;
        }

        renderer.draw(&sim.frame())?;
    }

    let a = sim.aircraft();
    log::info!(
        "Flight over after {} frames ({:.1}s): final position {}, \
         {} terrain window moves, {} overheats",
        clock.frame_count(),
        clock.elapsed_seconds(),
        a.position,
        window_moves,
        overheats
    );

    Ok(())
}
