//! Procedural generation for the terrain grid and the aircraft model.

pub mod aircraft;
pub mod terrain;

pub use aircraft::*;
pub use terrain::*;
