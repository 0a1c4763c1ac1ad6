//! `sw config`: print the effective engine configuration as TOML.

use std::error::Error;
use std::path::Path;

use sizewise::EngineConfig;

/// Print the built-in defaults, or `path` after loading and validating it.
pub fn run(path: Option<&Path>) -> Result<(), Box<dyn Error>> {
    print!("{}", render(path)?);
    Ok(())
}

fn render(path: Option<&Path>) -> Result<String, Box<dyn Error>> {
    let config = match path {
        Some(p) => EngineConfig::load(p)?,
        None => EngineConfig::default(),
    };
    Ok(config.to_toml_string()?)
}

#[cfg(test)]
#[path = "config_cmd_test.rs"]
mod tests;
