//! Text rewrite rules for gridfix.
//!
//! This module handles:
//! - Import-list normalization (`Grid,` to `Box,`)
//! - Regex substitutions for Grid container, item and closing tags
//! - Composing the stages into an ordered pipeline
//!
//! Everything here is textual pattern substitution, not a parse of the markup.

pub mod imports;
pub mod markup;
pub mod pipeline;
pub mod substitution;

pub use imports::ImportNormalizer;
pub use markup::{MARKUP_RULES, markup_rules};
pub use pipeline::Pipeline;
pub use substitution::Substitution;

/// A pure text-to-text stage of the rewrite pipeline.
pub trait TextTransform {
	/// Short stable name, used in logs.
	fn name(&self) -> &str;

	/// Transform `input`, returning the new content.
	fn apply(&self, input: &str) -> String;
}
