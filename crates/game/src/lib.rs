//! Faultline: a small flight simulation over streamed procedural terrain.

pub mod autopilot;
pub mod camera;
pub mod config;
pub mod hud;
pub mod render;
pub mod simulation;
pub mod terrain_cache;

pub use autopilot::*;
pub use camera::*;
pub use config::*;
pub use hud::*;
pub use render::*;
pub use simulation::*;
pub use terrain_cache::*;
