use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

/// Files rewritten when no CLI paths or config file name any.
pub const DEFAULT_TARGETS: &[&str] = &[
	"src/pages/cases/CaseDetailView.tsx",
	"src/pages/violations/ViolationCreate.tsx",
];

/// Name of the per-directory config file.
pub const CONFIG_FILE_NAME: &str = ".gridfix.toml";

/// Top-level configuration from a `.gridfix.toml` file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
	/// Files to rewrite, in order. Relative paths resolve against the working
	/// directory. Falls back to [`DEFAULT_TARGETS`] when absent.
	pub targets: Option<Vec<PathBuf>>,
}

/// Where the effective target list came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetSource {
	/// Positional command-line paths.
	Cli,

	/// A config file.
	ConfigFile(PathBuf),

	/// The built-in list.
	Default,
}

impl fmt::Display for TargetSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			TargetSource::Cli => write!(f, "command line"),
			TargetSource::ConfigFile(path) => write!(f, "{}", path.display()),
			TargetSource::Default => write!(f, "built-in defaults"),
		}
	}
}

/// The ordered list of files to rewrite, with its source.
///
/// Duplicates are kept and processed once per occurrence.
#[derive(Debug, Clone)]
pub struct TargetList {
	pub paths: Vec<PathBuf>,
	pub source: TargetSource,
}

impl TargetList {
	/// The built-in target list.
	pub fn defaults() -> Self {
		TargetList {
			paths: DEFAULT_TARGETS.iter().map(PathBuf::from).collect(),
			source: TargetSource::Default,
		}
	}
}
