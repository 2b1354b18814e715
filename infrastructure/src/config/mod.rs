//! Configuration file loading for examgen
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `EXAMGEN_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./examgen.toml` or `./.examgen.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/examgen/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileOutputConfig, FileOutputFormat, FileProviderConfig,
};
pub use loader::ConfigLoader;
