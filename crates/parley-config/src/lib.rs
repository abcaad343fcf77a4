//! Parley configuration system.
//!
//! Provides TOML-based configuration with validation. All config sections
//! use sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use parley_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("model: {}", config.api.model);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::ParleyConfig;

use parley_common::ConfigError;
use std::path::Path;

/// Load and validate the config.
///
/// With `Some(path)` the file must exist. With `None` the platform default
/// path is used and a commented default file is created if missing.
pub fn load_config(path: Option<&Path>) -> Result<ParleyConfig, ConfigError> {
    load_config_with(path, |_| {})
}

/// Like [`load_config`], but `overrides` is applied before validation so
/// command-line values are held to the same ranges as file values.
pub fn load_config_with(
    path: Option<&Path>,
    overrides: impl FnOnce(&mut ParleyConfig),
) -> Result<ParleyConfig, ConfigError> {
    let mut config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    overrides(&mut config);
    validation::validate(&config)?;
    Ok(config)
}
