use crate::error::Result;
use crate::rules::substitution::Substitution;

/// Built-in tag rewrites, in application order: (name, pattern, replacement).
///
/// These are textual matches on one tag shape each. Attributes in another
/// order, extra attributes, or tags split over several lines do not match and
/// pass through untouched. The `xs` captures in the item rules are matched but
/// never used in the output.
pub const MARKUP_RULES: &[(&str, &str, &str)] = &[
	(
		"grid-container",
		r"<Grid\s+container\s+spacing=\{(\d+)\}>",
		r#"<Box sx={{ display: "flex", flexWrap: "wrap", gap: ${1} }}>"#,
	),
	(
		"grid-item-xs-md",
		r"<Grid\s+item\s+xs=\{(\d+)\}\s+md=\{(\d+)\}>",
		r#"<Box sx={{ flex: "1 1 auto", minWidth: "300px", "@media (min-width: 960px)": { flex: "${2} 1 0%" } }}>"#,
	),
	(
		"grid-item-xs",
		r"<Grid\s+item\s+xs=\{(\d+)\}>",
		r#"<Box sx={{ flex: "1 1 auto", minWidth: "250px" }}>"#,
	),
	("grid-close", r"</Grid>", "</Box>"),
];

/// Compile the built-in tag rewrites.
pub fn markup_rules() -> Result<Vec<Substitution>> {
	MARKUP_RULES
		.iter()
		.map(|(name, pattern, replacement)| Substitution::new(*name, pattern, replacement))
		.collect()
}
