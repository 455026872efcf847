//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the keepsake binary.

mod commands;
mod handlers;

pub use commands::{Cli, Commands};
pub use handlers::{handle_config, handle_fetch, handle_remove, handle_upload, load_config};
