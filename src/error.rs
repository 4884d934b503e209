use std::path::PathBuf;

/// Library-level structured errors for gridfix.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum GridfixError {
	#[error("Failed to read target file: {path}")]
	FileRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write target file: {path}")]
	FileWrite {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to read config file: {path}")]
	ConfigRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Config file already exists: {path}")]
	ConfigExists { path: PathBuf },

	#[error("Invalid regex pattern in rule: {pattern}")]
	InvalidRegex {
		pattern: String,
		#[source]
		source: regex::Error,
	},
}

/// Result type alias using GridfixError.
pub type Result<T> = std::result::Result<T, GridfixError>;
