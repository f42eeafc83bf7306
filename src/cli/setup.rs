//! Runtime setup for the binary: logging, colour, configuration

use anyhow::Result;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use crate::config::{self, CodesniffConfig};

/// Log level implied by the `-v` count when `RUST_LOG` is unset
pub fn verbosity_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the tracing subscriber; `log` records are forwarded to it.
pub fn init_logging(verbosity: u8) {
    let default_level = verbosity_level(verbosity);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn configure_colors(plain: bool) {
    if plain || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }
}

/// Explicit path wins over discovery
pub fn load_configuration(explicit: Option<&Path>) -> Result<CodesniffConfig> {
    match explicit {
        Some(path) => Ok(config::load_config_file(path)?),
        None => Ok(config::load_config()),
    }
}
