//! Visual styling for service nodes.
//!
//! Colors are keyed purely by provider, independent of the service id; the
//! table is data rather than branching so new vendors are one line. Fixed
//! pixel metrics live here too so every tunable has a name.

/// RGBA color representation.
#[derive(Clone, Copy, Debug)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Darken the color by a factor (0.0 = unchanged, 1.0 = black)
	pub fn darken(self, factor: f64) -> Self {
		let f = 1.0 - factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 * f) as u8,
			g: (self.g as f64 * f) as u8,
			b: (self.b as f64 * f) as u8,
			a: self.a,
		}
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Brand colors for the glyph square, keyed by provider identifier.
const PROVIDER_COLORS: &[(&str, Color)] = &[
	("aws", Color::rgb(249, 115, 22)),      // Orange
	("gcp", Color::rgb(59, 130, 246)),      // Blue
	("azure", Color::rgb(6, 182, 212)),     // Cyan
	("supabase", Color::rgb(34, 197, 94)),  // Green
	("stripe", Color::rgb(168, 85, 247)),   // Purple
];

/// Neutral gray used for providers not in the table.
pub const UNKNOWN_PROVIDER_COLOR: Color = Color::rgb(107, 114, 128);

/// Look up the glyph-square color for a provider.
///
/// Resolution ignores the service id and icon entirely; unrecognized
/// providers fall back to [`UNKNOWN_PROVIDER_COLOR`].
pub fn provider_color(provider: &str) -> Color {
	PROVIDER_COLORS
		.iter()
		.find(|(key, _)| *key == provider)
		.map(|(_, color)| *color)
		.unwrap_or(UNKNOWN_PROVIDER_COLOR)
}

/// Connection anchor fill. Hover darkens it slightly.
pub const HANDLE_COLOR: Color = Color::rgb(59, 130, 246);

/// Selection ring drawn around the node.
pub const SELECTION_RING_COLOR: Color = Color::rgb(59, 130, 246);

/// Delete badge fill.
pub const DELETE_BADGE_COLOR: Color = Color::rgb(220, 38, 38);

/// Glyph text on top of the provider-colored square.
pub const GLYPH_TEXT_COLOR: Color = Color::rgb(17, 24, 39);

/// Backdrop behind the confirmation dialog.
pub const OVERLAY_COLOR: Color = Color::rgba(0, 0, 0, 0.5);

/// Side of the colored square holding a glyph icon.
pub const GLYPH_BOX_PX: i32 = 40;

/// Side of the square an image icon is scaled to.
pub const IMAGE_ICON_PX: i32 = 72;

/// Diameter of a connection anchor.
pub const HANDLE_SIZE_PX: i32 = 16;

/// Diameter of the delete badge.
pub const DELETE_BADGE_PX: i32 = 24;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn known_providers_resolve_table_colors() {
		assert_eq!(provider_color("aws").to_css(), "#f97316");
		assert_eq!(provider_color("gcp").to_css(), "#3b82f6");
		assert_eq!(provider_color("azure").to_css(), "#06b6d4");
		assert_eq!(provider_color("supabase").to_css(), "#22c55e");
		assert_eq!(provider_color("stripe").to_css(), "#a855f7");
	}

	#[test]
	fn unknown_providers_fall_back_to_gray() {
		let gray = UNKNOWN_PROVIDER_COLOR.to_css();
		assert_eq!(provider_color("oracle").to_css(), gray);
		assert_eq!(provider_color("").to_css(), gray);
		// Lookup is exact, not case-folded.
		assert_eq!(provider_color("AWS").to_css(), gray);
	}

	#[test]
	fn css_formatting() {
		assert_eq!(Color::rgb(0, 0, 0).to_css(), "#000000");
		assert_eq!(Color::rgba(0, 0, 0, 0.5).to_css(), "rgba(0, 0, 0, 0.5)");
	}

	#[test]
	fn darken_clamps_factor() {
		let c = Color::rgb(100, 100, 100).darken(2.0);
		assert_eq!((c.r, c.g, c.b), (0, 0, 0));
		let c = Color::rgb(100, 100, 100).darken(-1.0);
		assert_eq!((c.r, c.g, c.b), (100, 100, 100));
	}
}
