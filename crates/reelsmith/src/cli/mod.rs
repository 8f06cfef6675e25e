//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the reelsmith binary.

mod commands;
mod config;
mod generate;
mod voices;

pub use commands::{Cli, Commands, GenerateArgs};
pub use config::{load_config, show_config};
pub use generate::run_generate;
pub use voices::list_voices;
