//! Configuration management for the sgc workflow tool.
//!
//! Settings come from built-in defaults, an optional `.sgc.yaml` discovered
//! by walking up from the working directory, and `SGC_*` environment
//! variables, in increasing order of precedence. Command-line flags are
//! applied on top by the binary.

pub mod config;
pub mod config_file;

pub use config::{ConfigError, SgcConfig, load_config, load_config_from, save_config};
pub use config_file::{CONFIG_FILE_NAME, find_config_file};
