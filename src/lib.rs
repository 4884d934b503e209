//! Gridfix - one-shot codemod that rewrites MUI `<Grid>` layouts into flex `<Box>` layouts.
//!
//! This library provides the core functionality for gridfix, including:
//! - Target-list configuration (CLI paths, `.gridfix.toml`, built-in defaults)
//! - The ordered Grid-to-Box rewrite pipeline
//! - In-place file rewriting with per-file outcome reporting
//!
//! The rewrite is plain regex substitution over file text. Tags in shapes the
//! rules do not anticipate pass through unchanged.
//!
//! # Example
//!
//! ```no_run
//! use gridfix::config::resolve_targets;
//! use gridfix::fixer::Fixer;
//! use gridfix::rules::Pipeline;
//!
//! let cwd = std::env::current_dir().unwrap();
//! let targets = resolve_targets(&cwd, &[], None).unwrap();
//! let fixer = Fixer::new(Pipeline::grid_to_box().unwrap());
//!
//! fixer
//!     .run(&targets.paths, |outcome| println!("{}", outcome))
//!     .unwrap();
//! ```

pub mod config;
pub mod error;
pub mod fixer;
pub mod rules;

pub use error::{GridfixError, Result};
