use crate::error::Result;
use crate::rules::TextTransform;
use crate::rules::substitution::compile_regex;
use regex::Regex;

/// Import token being removed.
pub const GRID_TOKEN: &str = "Grid,";

/// Import token that takes its place.
pub const BOX_TOKEN: &str = "Box,";

/// Renames or drops the `Grid,` import token.
///
/// The token check is a plain substring search over the whole file, not a
/// parse of the import statement, so `DataGrid,` or a `Grid,` in a comment
/// count as well.
///
/// - `Grid,` present, `Box,` absent: every `Grid,` becomes `Box,`.
/// - both present: every `Grid,` is deleted and any `,<whitespace>,` left
///   behind anywhere in the file collapses to a single `,`.
/// - `Grid,` absent: content is returned unchanged.
#[derive(Debug)]
pub struct ImportNormalizer {
	double_comma: Regex,
}

impl ImportNormalizer {
	pub fn new() -> Result<Self> {
		Ok(ImportNormalizer {
			double_comma: compile_regex(r",\s*,")?,
		})
	}
}

impl TextTransform for ImportNormalizer {
	fn name(&self) -> &str {
		"import-list"
	}

	fn apply(&self, input: &str) -> String {
		if !input.contains(GRID_TOKEN) {
			return input.to_string();
		}

		if !input.contains(BOX_TOKEN) {
			return input.replace(GRID_TOKEN, BOX_TOKEN);
		}

		let stripped = input.replace(GRID_TOKEN, "");
		self.double_comma.replace_all(&stripped, ",").into_owned()
	}
}
