//! Configuration loading and the `config` command.

use reelsmith::{ReelsmithConfig, ReelsmithResult};
use std::path::Path;

/// Load configuration from an explicit file, or the layered default sources.
pub fn load_config(path: Option<&Path>) -> ReelsmithResult<ReelsmithConfig> {
    match path {
        Some(path) => ReelsmithConfig::from_file(path),
        None => ReelsmithConfig::load(),
    }
}

/// Print the effective configuration as TOML.
pub fn show_config(path: Option<&Path>) -> ReelsmithResult<()> {
    let config = load_config(path)?;
    print!("{}", config.to_toml_string()?);
    Ok(())
}
