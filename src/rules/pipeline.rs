use crate::error::Result;
use crate::rules::TextTransform;
use crate::rules::imports::ImportNormalizer;
use crate::rules::markup::markup_rules;

/// An ordered list of text transforms, applied left to right.
///
/// Each stage sees the previous stage's output.
pub struct Pipeline {
	stages: Vec<Box<dyn TextTransform>>,
}

impl std::fmt::Debug for Pipeline {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list()
			.entries(self.stages.iter().map(|s| s.name()))
			.finish()
	}
}

impl Pipeline {
	/// Build a pipeline from explicit stages.
	pub fn new(stages: Vec<Box<dyn TextTransform>>) -> Self {
		Pipeline { stages }
	}

	/// The Grid to Box rewrite: import list first, then the tag rules.
	pub fn grid_to_box() -> Result<Self> {
		let mut stages: Vec<Box<dyn TextTransform>> = vec![Box::new(ImportNormalizer::new()?)];
		for sub in markup_rules()? {
			stages.push(Box::new(sub));
		}
		let pipeline = Pipeline::new(stages);
		tracing::debug!(stages = ?pipeline.stage_names(), "built rewrite pipeline");
		Ok(pipeline)
	}

	/// Stage names, in application order.
	pub fn stage_names(&self) -> Vec<&str> {
		self.stages.iter().map(|s| s.name()).collect()
	}

	/// Run every stage over `input`.
	pub fn apply(&self, input: &str) -> String {
		let mut content = input.to_string();
		for stage in &self.stages {
			let next = stage.apply(&content);
			if next != content {
				tracing::debug!(stage = stage.name(), "stage rewrote content");
			}
			content = next;
		}
		content
	}
}
