//! In-place file rewriting for gridfix.
//!
//! This module handles:
//! - Reading each target file in full as UTF-8
//! - Running it through the rule pipeline
//! - Overwriting the file at the same path
//!
//! Writes go straight to the target path. There is no backup and no
//! temp-file-then-rename, so an interrupted write can truncate the file.

use crate::error::{GridfixError, Result};
use crate::rules::Pipeline;
use std::fmt;
use std::path::{Path, PathBuf};

/// Result of processing one target path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixOutcome {
	/// The file was read, transformed and written back.
	Fixed { path: PathBuf, changed: bool },

	/// The path does not exist; nothing was touched.
	NotFound { path: PathBuf },
}

impl fmt::Display for FixOutcome {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			FixOutcome::Fixed { path, .. } => {
				write!(f, "Fixed Grid components in {}", path.display())
			}
			FixOutcome::NotFound { path } => write!(f, "File not found: {}", path.display()),
		}
	}
}

/// Counts for a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixSummary {
	/// Files written whose content changed.
	pub fixed: usize,

	/// Files written whose content was already converted.
	pub unchanged: usize,

	/// Paths that did not exist.
	pub missing: usize,
}

impl FixSummary {
	fn record(&mut self, outcome: &FixOutcome) {
		match outcome {
			FixOutcome::Fixed { changed: true, .. } => self.fixed += 1,
			FixOutcome::Fixed { changed: false, .. } => self.unchanged += 1,
			FixOutcome::NotFound { .. } => self.missing += 1,
		}
	}
}

/// Rewrite one file in place.
///
/// A missing path is reported as [`FixOutcome::NotFound`], not an error.
/// Read failures (including invalid UTF-8) and write failures are errors.
pub fn fix_file(path: &Path, pipeline: &Pipeline) -> Result<FixOutcome> {
	if !path.exists() {
		tracing::info!(path = %path.display(), "target not found, skipping");
		return Ok(FixOutcome::NotFound {
			path: path.to_path_buf(),
		});
	}

	let content = std::fs::read_to_string(path).map_err(|source| GridfixError::FileRead {
		path: path.to_path_buf(),
		source,
	})?;

	let rewritten = pipeline.apply(&content);
	let changed = rewritten != content;

	// Written even when unchanged, matching the one-shot contract.
	std::fs::write(path, rewritten).map_err(|source| GridfixError::FileWrite {
		path: path.to_path_buf(),
		source,
	})?;

	tracing::info!(path = %path.display(), changed, "rewrote target");
	Ok(FixOutcome::Fixed {
		path: path.to_path_buf(),
		changed,
	})
}

/// Applies a pipeline to a list of files, one at a time, in order.
#[derive(Debug)]
pub struct Fixer {
	pipeline: Pipeline,
}

impl Fixer {
	pub fn new(pipeline: Pipeline) -> Self {
		Fixer { pipeline }
	}

	/// Process every path in order.
	///
	/// `on_outcome` runs after each path, before the next one is touched.
	/// The first read or write failure stops the run.
	pub fn run<F>(&self, paths: &[PathBuf], mut on_outcome: F) -> Result<FixSummary>
	where
		F: FnMut(&FixOutcome),
	{
		let mut summary = FixSummary::default();
		for path in paths {
			let outcome = fix_file(path, &self.pipeline)?;
			summary.record(&outcome);
			on_outcome(&outcome);
		}
		Ok(summary)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;

	fn fixer() -> Fixer {
		Fixer::new(Pipeline::grid_to_box().unwrap())
	}

	#[test]
	fn test_fix_file_rewrites_in_place() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("View.tsx");
		fs::write(&path, "<Grid item xs={4}>\n</Grid>\n").unwrap();

		let outcome = fix_file(&path, &Pipeline::grid_to_box().unwrap()).unwrap();
		assert_eq!(
			outcome,
			FixOutcome::Fixed {
				path: path.clone(),
				changed: true
			}
		);
		assert_eq!(
			fs::read_to_string(&path).unwrap(),
			"<Box sx={{ flex: \"1 1 auto\", minWidth: \"250px\" }}>\n</Box>\n"
		);
	}

	#[test]
	fn test_fix_file_missing_path_touches_nothing() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("missing.tsx");

		let outcome = fix_file(&path, &Pipeline::grid_to_box().unwrap()).unwrap();
		assert_eq!(outcome, FixOutcome::NotFound { path: path.clone() });
		assert!(!path.exists());
		assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
	}

	#[test]
	fn test_fix_file_invalid_utf8_is_read_error() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("bad.tsx");
		fs::write(&path, [0xff, 0xfe, 0x00, 0x47]).unwrap();

		let result = fix_file(&path, &Pipeline::grid_to_box().unwrap());
		assert!(matches!(result, Err(GridfixError::FileRead { .. })));
		assert_eq!(fs::read(&path).unwrap(), vec![0xff, 0xfe, 0x00, 0x47]);
	}

	#[test]
	fn test_outcome_messages() {
		let fixed = FixOutcome::Fixed {
			path: PathBuf::from("src/A.tsx"),
			changed: false,
		};
		let missing = FixOutcome::NotFound {
			path: PathBuf::from("src/B.tsx"),
		};
		assert_eq!(fixed.to_string(), "Fixed Grid components in src/A.tsx");
		assert_eq!(missing.to_string(), "File not found: src/B.tsx");
	}

	#[test]
	fn test_run_processes_in_order_and_continues_past_missing() {
		let dir = tempfile::tempdir().unwrap();
		let a = dir.path().join("a.tsx");
		let missing = dir.path().join("missing.tsx");
		let b = dir.path().join("b.tsx");
		fs::write(&a, "</Grid>").unwrap();
		fs::write(&b, "<Box />").unwrap();

		let mut seen = Vec::new();
		let summary = fixer()
			.run(&[a.clone(), missing.clone(), b.clone()], |o| seen.push(o.clone()))
			.unwrap();

		assert_eq!(
			seen,
			vec![
				FixOutcome::Fixed {
					path: a.clone(),
					changed: true
				},
				FixOutcome::NotFound { path: missing },
				FixOutcome::Fixed {
					path: b.clone(),
					changed: false
				},
			]
		);
		assert_eq!(
			summary,
			FixSummary {
				fixed: 1,
				unchanged: 1,
				missing: 1
			}
		);
		assert_eq!(fs::read_to_string(&a).unwrap(), "</Box>");
	}

	#[test]
	fn test_run_twice_is_noop_on_second_pass() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("View.tsx");
		fs::write(
			&path,
			"import { Grid, Paper } from '@mui/material';\n<Grid container spacing={2}>\n</Grid>\n",
		)
		.unwrap();

		let paths = vec![path.clone()];
		fixer().run(&paths, |_| {}).unwrap();
		let once = fs::read_to_string(&path).unwrap();

		let summary = fixer().run(&paths, |_| {}).unwrap();
		assert_eq!(summary.unchanged, 1);
		assert_eq!(fs::read_to_string(&path).unwrap(), once);
	}

	#[test]
	fn test_run_duplicates_processed_twice() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("View.tsx");
		fs::write(&path, "</Grid>").unwrap();

		let mut count = 0;
		let summary = fixer()
			.run(&[path.clone(), path.clone()], |_| count += 1)
			.unwrap();
		assert_eq!(count, 2);
		assert_eq!(summary.fixed, 1);
		assert_eq!(summary.unchanged, 1);
	}

	#[test]
	fn test_run_stops_on_read_error() {
		let dir = tempfile::tempdir().unwrap();
		let bad = dir.path().join("bad.tsx");
		let later = dir.path().join("later.tsx");
		fs::write(&bad, [0xff, 0xfe]).unwrap();
		fs::write(&later, "</Grid>").unwrap();

		let mut seen = 0;
		let result = fixer().run(&[bad, later.clone()], |_| seen += 1);
		assert!(result.is_err());
		assert_eq!(seen, 0);
		assert_eq!(fs::read_to_string(&later).unwrap(), "</Grid>");
	}
}
