//! Inputs and configuration shared across the workspace.

mod landmarks;
mod options;

pub use landmarks::*;
pub use options::*;
