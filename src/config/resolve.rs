use crate::config::parser::parse_config_file;
use crate::config::types::{CONFIG_FILE_NAME, TargetList, TargetSource};
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Resolve the effective target list.
///
/// Precedence, highest first:
/// 1. `cli_paths`, if non-empty
/// 2. `explicit_config` (`--config FILE`), which must exist
/// 3. `.gridfix.toml` in `cwd`, if present
/// 4. the built-in defaults
///
/// A config file without a `targets` key falls through to the defaults.
pub fn resolve_targets(
	cwd: &Path,
	cli_paths: &[PathBuf],
	explicit_config: Option<&Path>,
) -> Result<TargetList> {
	if !cli_paths.is_empty() {
		return Ok(TargetList {
			paths: cli_paths.to_vec(),
			source: TargetSource::Cli,
		});
	}

	let config_path = match explicit_config {
		Some(path) => Some(path.to_path_buf()),
		None => local_config_path(cwd),
	};

	if let Some(config_path) = config_path {
		tracing::debug!(path = %config_path.display(), "loading config");
		let config = parse_config_file(&config_path)?;
		if let Some(paths) = config.targets {
			return Ok(TargetList {
				paths,
				source: TargetSource::ConfigFile(config_path),
			});
		}
		tracing::debug!("config has no targets, using built-in defaults");
	}

	Ok(TargetList::defaults())
}

/// Path of `.gridfix.toml` in `dir`, if it exists.
pub fn local_config_path(dir: &Path) -> Option<PathBuf> {
	let path = dir.join(CONFIG_FILE_NAME);
	path.exists().then_some(path)
}
