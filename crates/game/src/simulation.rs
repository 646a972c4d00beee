//! The simulation loop state: one aircraft and the terrain streamed under it.

use engine_core::ControlInput;
use physics::{AircraftState, EngineState, FlightParams};
use procgen::AircraftModel;

use crate::camera::ChaseCamera;
use crate::config::SimConfig;
use crate::hud::HudTelemetry;
use crate::render::{DrawMode, FrameView};
use crate::terrain_cache::{RefreshOutcome, TerrainCache};

/// What happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// Set when the overheat latch flipped.
    pub engine: Option<EngineState>,
    pub terrain: RefreshOutcome,
}

/// Owns all mutable simulation state. Each tick runs controls, flight
/// integration and terrain refresh in that order.
#[derive(Debug)]
pub struct Simulation {
    params: FlightParams,
    aircraft: AircraftState,
    terrain: TerrainCache,
    camera: ChaseCamera,
    model: AircraftModel,
    draw_mode: DrawMode,
    frame: u64,
    elapsed_seconds: f32,
}

impl Simulation {
    /// Spawn the aircraft and stream in the terrain around it.
    pub fn new(config: &SimConfig) -> Self {
        let params = config.flight_params();
        let aircraft = AircraftState::spawn(&params);
        let mut terrain = TerrainCache::new(config.terrain);
        terrain.refresh(aircraft.position);

        log::info!(
            "Simulation ready: profile {:?}, {} chunks resident around {:?}",
            config.profile,
            terrain.len(),
            terrain.current()
        );

        Self {
            params,
            aircraft,
            terrain,
            camera: ChaseCamera::new(config.profile.camera_distance(), config.camera_height),
            model: AircraftModel::build(),
            draw_mode: DrawMode::default(),
            frame: 0,
            elapsed_seconds: 0.0,
        }
    }

    /// Advance one tick of `dt` seconds.
    pub fn tick(&mut self, controls: &ControlInput, dt: f32) -> TickReport {
        self.aircraft.apply_controls(controls, &self.params, dt);
        let engine = self.aircraft.integrate(&self.params, dt);
        let terrain = self.terrain.refresh(self.aircraft.position);

        self.frame += 1;
        self.elapsed_seconds += dt;
        TickReport { engine, terrain }
    }

    pub fn toggle_draw_mode(&mut self) {
        self.draw_mode = self.draw_mode.toggled();
        log::debug!("Draw mode: {:?}", self.draw_mode);
    }

    /// Borrow everything the renderer needs for this frame.
    pub fn frame(&self) -> FrameView<'_> {
        FrameView {
            frame: self.frame,
            elapsed_seconds: self.elapsed_seconds,
            aircraft: &self.aircraft,
            model: &self.model,
            terrain: &self.terrain,
            camera: self.camera.pose(self.aircraft.position, &self.aircraft.orientation),
            hud: HudTelemetry::from_state(&self.aircraft, self.draw_mode, self.elapsed_seconds),
            draw_mode: self.draw_mode,
        }
    }

    pub fn aircraft(&self) -> &AircraftState {
        &self.aircraft
    }

    /// Direct access for scripted scenarios.
    pub fn aircraft_mut(&mut self) -> &mut AircraftState {
        &mut self.aircraft
    }

    pub fn terrain(&self) -> &TerrainCache {
        &self.terrain
    }

    pub fn params(&self) -> &FlightParams {
        &self.params
    }

    pub fn draw_mode(&self) -> DrawMode {
        self.draw_mode
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    pub fn elapsed_seconds(&self) -> f32 {
        self.elapsed_seconds
    }
}
