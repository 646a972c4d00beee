//! Flight dynamics for Faultline: aircraft kinematics and engine heat.

pub mod engine;
pub mod flight;

pub use engine::*;
pub use flight::*;
