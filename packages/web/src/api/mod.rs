//! REST client for the providers backend

mod client;
mod providers;
mod system;

pub use client::*;
