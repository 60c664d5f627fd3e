//! Reusable UI components

mod header;
mod loading;
mod main_layout;
mod notice;
mod provider_form;
mod providers_table;

pub use header::*;
pub use loading::*;
pub use main_layout::*;
pub use notice::*;
pub use provider_form::*;
pub use providers_table::*;
