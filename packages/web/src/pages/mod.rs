//! Application pages

mod providers;
mod welcome;

pub use providers::*;
pub use welcome::*;
