//! Core engine types and utilities for Faultline.
//!
//! This crate provides the foundational types shared by every other crate:
//! - Scalar helpers for degree-based angles
//! - Orientation and control input types
//! - Frame clock

pub mod components;
pub mod math;
pub mod time;

pub use components::*;
pub use math::*;
pub use time::*;

// Re-export commonly used types
pub use glam::{Mat4, Vec3};
