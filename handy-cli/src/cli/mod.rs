//! CLI command implementations.
//!
//! - `arcs` - Draw the random arc test scene
//! - `arc` - Draw a single arc

pub mod arc;
pub mod arcs;
pub mod canvas;
pub mod common;
pub mod config;
pub mod error;

pub use arc::{cmd_arc, ArcArgs};
pub use arcs::{cmd_arcs, ArcsArgs};
pub use error::CliError;
