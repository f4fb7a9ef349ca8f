//! Connection anchors for drawing edges between nodes.
//!
//! Every node side carries two overlapping anchors, one per role: where an
//! edge leaves the node and where an edge enters it. Both roles of a side
//! share that side's positional identifier, so the canvas engine registers
//! them as a single bidirectional attachment slot and routes same-side
//! connections to one point.
//!
//! The engine binds to anchors through the DOM contract: every anchor is a
//! `div.node-handle` carrying `data-side` (the shared positional
//! identifier) and `data-role` ("source" or "target").

use leptos::prelude::*;

use super::theme;

/// Node side an anchor sits on. The identifier doubles as the positional
/// slot shared by both roles of that side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandleSide {
	Top,
	Bottom,
	Left,
	Right,
}

impl HandleSide {
	/// All four sides, in rendering order.
	pub const ALL: [HandleSide; 4] = [
		HandleSide::Top,
		HandleSide::Bottom,
		HandleSide::Left,
		HandleSide::Right,
	];

	/// Positional identifier the engine keys attachment slots by.
	pub fn id(self) -> &'static str {
		match self {
			HandleSide::Top => "top",
			HandleSide::Bottom => "bottom",
			HandleSide::Left => "left",
			HandleSide::Right => "right",
		}
	}

	// Centers the anchor on its side edge, protruding slightly outside the
	// node bounds so it stays clickable next to the body.
	fn anchor_style(self) -> &'static str {
		match self {
			HandleSide::Top => "top: -6px; left: 50%; transform: translateX(-50%);",
			HandleSide::Bottom => "bottom: -6px; left: 50%; transform: translateX(-50%);",
			HandleSide::Left => "left: -6px; top: 50%; transform: translateY(-50%);",
			HandleSide::Right => "right: -6px; top: 50%; transform: translateY(-50%);",
		}
	}
}

/// Role of an anchor: outgoing edges start at sources, incoming edges end
/// at targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandleRole {
	Source,
	Target,
}

impl HandleRole {
	/// Role name as exposed to the engine.
	pub fn as_str(self) -> &'static str {
		match self {
			HandleRole::Source => "source",
			HandleRole::Target => "target",
		}
	}
}

/// The full anchor layout of a node: each side exposes exactly one source
/// and one target anchor.
pub fn anchor_layout() -> impl Iterator<Item = (HandleSide, HandleRole)> {
	HandleSide::ALL
		.into_iter()
		.flat_map(|side| [(side, HandleRole::Source), (side, HandleRole::Target)])
}

/// A single connection anchor.
#[component]
pub fn ConnectionHandle(side: HandleSide, role: HandleRole) -> impl IntoView {
	let hovered = RwSignal::new(false);

	let style = move || {
		let fill = if hovered.get() {
			theme::HANDLE_COLOR.darken(0.12)
		} else {
			theme::HANDLE_COLOR
		};
		format!(
			"position: absolute; width: {size}px; height: {size}px; \
			 border-radius: 50%; border: 2px solid #fff; background-color: {fill}; \
			 cursor: crosshair; pointer-events: auto; z-index: 1; {anchor}",
			size = theme::HANDLE_SIZE_PX,
			fill = fill.to_css(),
			anchor = side.anchor_style(),
		)
	};

	view! {
		<div
			class="node-handle"
			data-side=side.id()
			data-role=role.as_str()
			style=style
			on:mouseenter=move |_| hovered.set(true)
			on:mouseleave=move |_| hovered.set(false)
		></div>
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	#[test]
	fn every_side_exposes_one_source_and_one_target() {
		let anchors: Vec<_> = anchor_layout().collect();
		assert_eq!(anchors.len(), 8);

		for side in HandleSide::ALL {
			let sources = anchors
				.iter()
				.filter(|(s, r)| *s == side && *r == HandleRole::Source)
				.count();
			let targets = anchors
				.iter()
				.filter(|(s, r)| *s == side && *r == HandleRole::Target)
				.count();
			assert_eq!(sources, 1, "side {:?}", side);
			assert_eq!(targets, 1, "side {:?}", side);
		}
	}

	#[test]
	fn both_roles_of_a_side_share_its_identifier() {
		for side in HandleSide::ALL {
			let ids: HashSet<_> = anchor_layout()
				.filter(|(s, _)| *s == side)
				.map(|(s, _)| s.id())
				.collect();
			assert_eq!(ids.len(), 1);
		}
	}

	#[test]
	fn side_identifiers_are_distinct() {
		let ids: HashSet<_> = HandleSide::ALL.iter().map(|s| s.id()).collect();
		assert_eq!(ids.len(), 4);
		assert_eq!(HandleSide::Left.id(), "left");
		assert_eq!(HandleSide::Right.id(), "right");
		assert_eq!(HandleSide::Top.id(), "top");
		assert_eq!(HandleSide::Bottom.id(), "bottom");
	}
}
