//! Target-list configuration for gridfix.
//!
//! This module handles:
//! - TOML config file parsing
//! - Resolving the target list from CLI paths, config files and defaults
//! - The `--init` config template

pub mod parser;
pub mod resolve;
pub mod types;

pub use parser::{generate_init_template, parse_config_file, parse_config_str};
pub use resolve::{local_config_path, resolve_targets};
pub use types::{CONFIG_FILE_NAME, Config, DEFAULT_TARGETS, TargetList, TargetSource};
