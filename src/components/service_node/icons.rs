//! Icon resolution for service nodes.
//!
//! An explicit icon on the record always wins; built-in glyphs exist only
//! for a small set of well-known service ids, with a generic cloud fallback
//! for everything else.

use super::types::ServiceNodeData;

/// Built-in glyphs for well-known service ids.
const DEFAULT_ICONS: &[(&str, &str)] = &[
	("lambda", "λ"),
	("ec2", "🖥️"),
	("s3", "🪣"),
	("rds", "🗄️"),
	("vpc", "🌐"),
	("alb", "⚖️"),
];

/// Glyph for service ids without a built-in default.
pub const GENERIC_ICON: &str = "☁️";

/// Extensions recognized as image assets. Matching is case-sensitive.
const IMAGE_EXTENSIONS: [&str; 4] = [".png", ".svg", ".jpg", ".jpeg"];

/// Built-in glyph for a service id, or [`GENERIC_ICON`].
pub fn default_icon(service_id: &str) -> &'static str {
	DEFAULT_ICONS
		.iter()
		.find(|(id, _)| *id == service_id)
		.map(|(_, glyph)| *glyph)
		.unwrap_or(GENERIC_ICON)
}

/// Resolve the icon for a record: a present, non-empty `icon` field beats
/// the id-based default.
pub fn resolve_icon(data: &ServiceNodeData) -> String {
	match &data.icon {
		Some(icon) if !icon.is_empty() => icon.clone(),
		_ => default_icon(&data.id).to_string(),
	}
}

/// Whether a resolved icon is a path to an image asset rather than an
/// inline glyph: a leading `/` plus one of the recognized extensions.
pub fn is_image_icon(icon: &str) -> bool {
	icon.starts_with('/') && IMAGE_EXTENSIONS.iter().any(|ext| icon.ends_with(ext))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn record(id: &str, icon: Option<&str>) -> ServiceNodeData {
		ServiceNodeData {
			id: id.to_string(),
			provider: "aws".to_string(),
			name: "Test".to_string(),
			icon: icon.map(str::to_string),
			on_delete: None,
		}
	}

	#[test]
	fn known_ids_resolve_table_glyphs() {
		for (id, glyph) in [
			("lambda", "λ"),
			("ec2", "🖥️"),
			("s3", "🪣"),
			("rds", "🗄️"),
			("vpc", "🌐"),
			("alb", "⚖️"),
		] {
			assert_eq!(resolve_icon(&record(id, None)), glyph);
		}
	}

	#[test]
	fn unknown_ids_resolve_generic_glyph() {
		assert_eq!(resolve_icon(&record("cloud-run", None)), GENERIC_ICON);
		assert_eq!(resolve_icon(&record("", None)), GENERIC_ICON);
	}

	#[test]
	fn explicit_icon_beats_default() {
		assert_eq!(resolve_icon(&record("lambda", Some("🔥"))), "🔥");
		assert_eq!(
			resolve_icon(&record("lambda", Some("/icons/lambda.svg"))),
			"/icons/lambda.svg"
		);
	}

	#[test]
	fn empty_explicit_icon_falls_back() {
		assert_eq!(resolve_icon(&record("s3", Some(""))), "🪣");
	}

	#[test]
	fn image_detection_requires_leading_slash_and_known_extension() {
		assert!(is_image_icon("/icons/s3.png"));
		assert!(is_image_icon("/icons/s3.svg"));
		assert!(is_image_icon("/icons/s3.jpg"));
		assert!(is_image_icon("/icons/s3.jpeg"));

		assert!(!is_image_icon("icons/s3.png")); // relative path
		assert!(!is_image_icon("/icons/s3.gif")); // unrecognized extension
		assert!(!is_image_icon("/icons/s3.PNG")); // case-sensitive
		assert!(!is_image_icon("☁️"));
		assert!(!is_image_icon(""));
	}
}
