use crate::config::types::Config;
use crate::error::{GridfixError, Result};
use std::path::Path;

/// Parse a config file from the given path.
pub fn parse_config_file(path: &Path) -> Result<Config> {
	let content = std::fs::read_to_string(path).map_err(|source| GridfixError::ConfigRead {
		path: path.to_path_buf(),
		source,
	})?;

	parse_config_str(&content, path)
}

/// Parse a config from a string (useful for testing).
pub fn parse_config_str(content: &str, path: &Path) -> Result<Config> {
	toml::from_str(content).map_err(|source| GridfixError::ConfigParse {
		path: path.to_path_buf(),
		source,
	})
}

/// Template written by `gridfix --init`.
pub fn generate_init_template() -> String {
	let mut template = String::from(
		"# gridfix configuration\n\
		 #\n\
		 # Files rewritten from MUI <Grid> to flex <Box>, in order.\n\
		 # Relative paths resolve against the directory gridfix runs in.\n\
		 targets = [\n",
	);
	for target in crate::config::types::DEFAULT_TARGETS {
		template.push_str(&format!("\t\"{}\",\n", target));
	}
	template.push_str("]\n");
	template
}
