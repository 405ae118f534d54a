//! Rigid-body dynamics: integration, impulse application and the pairwise
//! contact solver, all implemented as methods on [`crate::core::Actor`].

pub mod impulse;
pub mod integrator;
pub mod solver;
