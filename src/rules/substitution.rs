use crate::error::{GridfixError, Result};
use crate::rules::TextTransform;
use regex::Regex;

/// A compiled regex substitution stage.
#[derive(Debug)]
pub struct Substitution {
	/// Stage name, used in logs.
	pub name: &'static str,

	/// The pattern to match.
	pub pattern: Regex,

	/// The replacement template. `$1`/`${1}` refer to capture groups.
	pub replacement: String,
}

impl Substitution {
	/// Compile a substitution that rewrites every non-overlapping match.
	pub fn new(name: &'static str, pattern: &str, replacement: &str) -> Result<Self> {
		let pattern = compile_regex(pattern)?;

		Ok(Substitution {
			name,
			pattern,
			replacement: replacement.to_string(),
		})
	}
}

impl TextTransform for Substitution {
	fn name(&self) -> &str {
		self.name
	}

	fn apply(&self, input: &str) -> String {
		self.pattern
			.replace_all(input, self.replacement.as_str())
			.into_owned()
	}
}

/// Compile a regex pattern string.
pub(crate) fn compile_regex(pattern: &str) -> Result<Regex> {
	Regex::new(pattern).map_err(|source| GridfixError::InvalidRegex {
		pattern: pattern.to_string(),
		source,
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_compile_invalid_regex() {
		let result = Substitution::new("broken", r"[invalid", "x");
		match result.unwrap_err() {
			GridfixError::InvalidRegex { pattern, .. } => {
				assert_eq!(pattern, "[invalid");
			}
			_ => panic!("Expected InvalidRegex error"),
		}
	}

	#[test]
	fn test_apply_replaces_every_match() {
		let sub = Substitution::new("foo", "foo", "bar").unwrap();
		assert_eq!(sub.apply("foo foo\nfoo"), "bar bar\nbar");
	}

	#[test]
	fn test_apply_with_capture_groups() {
		let sub = Substitution::new("wrap", r"(\w+)", "[${1}]").unwrap();
		assert_eq!(sub.apply("hello world"), "[hello] [world]");
	}

	#[test]
	fn test_literal_braces_in_replacement() {
		let sub = Substitution::new("gap", r"n=(\d+)", "{{ gap: ${1} }}").unwrap();
		assert_eq!(sub.apply("n=3"), "{{ gap: 3 }}");
	}

	#[test]
	fn test_no_match_returns_input() {
		let sub = Substitution::new("foo", "foo", "bar").unwrap();
		assert_eq!(sub.apply("nothing here"), "nothing here");
	}
}
