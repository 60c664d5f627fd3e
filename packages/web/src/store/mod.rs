//! Application state containers

mod providers;
mod welcome;

pub use providers::*;
pub use welcome::*;
