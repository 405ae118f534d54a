//! Utility helpers: math extensions, the actor arena, and step profiling.

pub mod allocator;
pub mod math;
pub mod profiling;

pub use allocator::{ActorHandle, Arena};
pub use math::*;
pub use profiling::{ScopedTimer, StepProfile};
