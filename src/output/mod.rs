//! Output formatting for test results.
//!
//! - Terminal: human-readable output with colors and box drawing
//! - JSON: machine-readable serialization

mod json;
mod terminal;

pub use json::{to_json, to_json_pretty};
pub use terminal::{format_outcome, format_power};
