//! Collision detection: the shape-pair dispatcher, its detectors, and the
//! contact record they produce.

pub mod contact;
pub mod narrowphase;
pub mod projection;

pub use contact::Collision;
pub use projection::{extremes, projection_overlap, Extremes};
