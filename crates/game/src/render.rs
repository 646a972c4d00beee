//! The seam to the presentation layer.
//!
//! A renderer borrows one [`FrameView`] per frame and never feeds state back
//! into the simulation. The window, GL context and drawing calls live behind
//! [`Renderer`] implementations outside this crate; [`TelemetryLogger`] is the
//! headless stand-in.

use anyhow::Result;
use physics::AircraftState;
use procgen::AircraftModel;

use crate::camera::CameraPose;
use crate::hud::HudTelemetry;
use crate::terrain_cache::TerrainCache;

/// How the aircraft is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DrawMode {
    #[default]
    Wireframe,
    Solid,
}

impl DrawMode {
    pub fn toggled(self) -> Self {
        match self {
            DrawMode::Wireframe => DrawMode::Solid,
            DrawMode::Solid => DrawMode::Wireframe,
        }
    }
}

/// Read-only snapshot handed to the renderer for one frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub frame: u64,
    pub elapsed_seconds: f32,
    pub aircraft: &'a AircraftState,
    pub model: &'a AircraftModel,
    pub terrain: &'a TerrainCache,
    pub camera: CameraPose,
    pub hud: HudTelemetry,
    pub draw_mode: DrawMode,
}

impl FrameView<'_> {
    /// Total terrain line segments this frame.
    pub fn terrain_segment_count(&self) -> usize {
        self.terrain.chunks().map(|c| c.edges().len()).sum()
    }
}

/// Presentation collaborator.
pub trait Renderer {
    fn draw(&mut self, frame: &FrameView<'_>) -> Result<()>;
}

/// Headless renderer: walks the frame like a line rasterizer would and logs
/// telemetry every `interval` frames.
#[derive(Debug)]
pub struct TelemetryLogger {
    interval: u64,
    frames_drawn: u64,
    last_segments: usize,
}

impl TelemetryLogger {
    pub fn new(interval: u64) -> Self {
        Self {
            interval: interval.max(1),
            frames_drawn: 0,
            last_segments: 0,
        }
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    /// Line segments submitted in the last frame (terrain plus aircraft).
    pub fn last_segments(&self) -> usize {
        self.last_segments
    }
}

impl Renderer for TelemetryLogger {
    fn draw(&mut self, frame: &FrameView<'_>) -> Result<()> {
        let terrain = frame.terrain.chunks().flat_map(|c| c.line_segments()).count();
        let aircraft = match frame.draw_mode {
            DrawMode::Wireframe => frame.model.line_segments().count(),
            DrawMode::Solid => 0,
        };
        self.last_segments = terrain + aircraft;
        self.frames_drawn += 1;

        if frame.frame % self.interval == 0 {
            let a = frame.aircraft;
            log::info!(
                "t={:>6.2}s pos=({:>8.1}, {:>6.1}, {:>8.1}) spd={:.3} pitch={:>6.1} yaw={:>6.1} roll={:>6.1} thr={:.2} temp={:.2}{} chunks={} segs={}",
                frame.elapsed_seconds,
                a.position.x,
                a.position.y,
                a.position.z,
                frame.hud.speed,
                a.orientation.pitch,
                a.orientation.yaw,
                a.orientation.roll,
                frame.hud.throttle,
                frame.hud.temperature,
                if frame.hud.overheated { " OVERHEAT" } else { "" },
                frame.terrain.len(),
                self.last_segments,
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::simulation::Simulation;

    #[test]
    fn draw_mode_toggles() {
        assert_eq!(DrawMode::default(), DrawMode::Wireframe);
        assert_eq!(DrawMode::Wireframe.toggled(), DrawMode::Solid);
        assert_eq!(DrawMode::Solid.toggled(), DrawMode::Wireframe);
    }

    #[test]
    fn logger_counts_every_segment() {
        let sim = Simulation::new(&SimConfig::default());
        let mut logger = TelemetryLogger::new(1);
        let frame = sim.frame();
        logger.draw(&frame).unwrap();
        // 25 chunks of 11x11 points, plus the 15-edge aircraft.
        assert_eq!(frame.terrain_segment_count(), 25 * 200);
        assert_eq!(logger.last_segments(), 25 * 200 + 15);
        assert_eq!(logger.frames_drawn(), 1);
    }

    #[test]
    fn solid_mode_skips_wireframe_aircraft() {
        let mut sim = Simulation::new(&SimConfig::default());
        sim.toggle_draw_mode();
        let mut logger = TelemetryLogger::new(0);
        logger.draw(&sim.frame()).unwrap();
        assert_eq!(logger.last_segments(), 25 * 200);
    }
}
