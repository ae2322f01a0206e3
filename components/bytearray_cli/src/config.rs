//! Byte array options from a JSON file and command-line overrides

use crate::cli::Cli;
use crate::error::{CliError, CliResult};
use bytearray::ByteArrayOptions;
use std::fs;
use tracing::debug;

/// Parse options from JSON text. Missing fields take their defaults.
pub fn parse_options(json: &str) -> CliResult<ByteArrayOptions> {
    serde_json::from_str(json).map_err(|e| CliError::ConfigError(e.to_string()))
}

/// Read options from the JSON file at `path`
pub fn load_options(path: &str) -> CliResult<ByteArrayOptions> {
    let json = fs::read_to_string(path)?;
    let options = parse_options(&json).map_err(|e| match e {
        CliError::ConfigError(reason) => CliError::ConfigError(format!("{}: {}", path, reason)),
        other => other,
    })?;
    debug!(path, ?options, "loaded byte array options");
    Ok(options)
}

/// Options for a shell session: the config file if given, then flag overrides
pub fn resolve_options(cli: &Cli) -> CliResult<ByteArrayOptions> {
    let mut options = match &cli.config {
        Some(path) => load_options(path)?,
        None => ByteArrayOptions::default(),
    };
    if let Some(capacity) = cli.initial_capacity {
        options = options.with_initial_capacity(capacity);
    }
    if cli.max_length.is_some() {
        options = options.with_max_length(cli.max_length);
    }
    Ok(options)
}
