//! Leptos component rendering one cloud service node.
//!
//! The node is a presentation leaf: it reads a validated data record plus a
//! selection flag and delegates every graph mutation to the canvas engine
//! and to parent-supplied callbacks. The icon and color come from the
//! lookup tables in [`super::icons`] and [`super::theme`]; the only local
//! state is the delete-confirmation flow.

use leptos::prelude::*;

use super::dialog::{ConfirmState, DeleteConfirmDialog};
use super::handle::{anchor_layout, ConnectionHandle};
use super::icons;
use super::theme;
use super::types::{NodePayload, ServiceNodeData};

/// One cloud service node on the diagram canvas.
///
/// For a valid payload this renders the icon area, the eight connection
/// anchors, and the selection ring; when selected and a delete callback is
/// present, also the delete badge with its confirmation dialog. An invalid
/// payload renders only a minimal placeholder: no anchors, no icon logic,
/// no dialog.
///
/// Rendering is fine-grained: the node body is rebuilt only when the
/// payload changes, while selection toggles re-run just the ring and badge
/// closures. A diagram instantiates one of these per node, so nothing here
/// does per-frame work.
#[component]
pub fn ServiceNode(
	#[prop(into)] data: Signal<NodePayload>,
	#[prop(into)] selected: Signal<bool>,
	#[prop(optional, into)] on_double_click: Option<Callback<ServiceNodeData>>,
) -> impl IntoView {
	let confirm = RwSignal::new(ConfirmState::Closed);

	move || match data.get() {
		NodePayload::Invalid => view! {
			<div
				class="service-node-invalid"
				style="background-color: #fff; border: 1px solid #e5e7eb; \
					border-radius: 8px; padding: 8px; min-width: 100px; \
					box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);"
			>
				<div style="text-align: center; color: #6b7280; font-size: 12px;">
					"Invalid"
				</div>
			</div>
		}
		.into_any(),
		NodePayload::Valid(node) => {
			let icon = icons::resolve_icon(&node);
			let color = theme::provider_color(&node.provider);
			let name = node.name.clone();
			let has_delete = node.on_delete.is_some();
			let on_delete = node.on_delete;
			let record = node;

			let ring_style = move || {
				if selected.get() {
					format!(
						"position: relative; box-shadow: 0 0 0 2px #fff, 0 0 0 4px {};",
						theme::SELECTION_RING_COLOR.to_css(),
					)
				} else {
					"position: relative;".to_string()
				}
			};

			let badge_style = format!(
				"position: absolute; top: -12px; right: -12px; \
				 width: {size}px; height: {size}px; border-radius: 50%; border: none; \
				 background-color: {fill}; color: #fff; cursor: pointer; z-index: 10; \
				 box-shadow: 0 2px 6px rgba(0, 0, 0, 0.3); line-height: 1;",
				size = theme::DELETE_BADGE_PX,
				fill = theme::DELETE_BADGE_COLOR.to_css(),
			);

			let icon_area = if icons::is_image_icon(&icon) {
				view! {
					<img
						class="node-icon-image"
						src=icon.clone()
						alt=name.clone()
						style=format!(
							"width: {size}px; height: {size}px; display: block;",
							size = theme::IMAGE_ICON_PX,
						)
					/>
				}
				.into_any()
			} else {
				view! {
					<div
						class="node-glyph"
						style=format!(
							"width: {size}px; height: {size}px; display: flex; \
							 align-items: center; justify-content: center; \
							 background-color: {fill}; \
							 box-shadow: 0 2px 6px rgba(0, 0, 0, 0.2);",
							size = theme::GLYPH_BOX_PX,
							fill = color.to_css(),
						)
					>
						<span style=format!(
							"color: {}; font-size: 16px; font-weight: 700;",
							theme::GLYPH_TEXT_COLOR.to_css(),
						)>{icon.clone()}</span>
					</div>
				}
				.into_any()
			};

			view! {
				<div class="service-node" style=ring_style>
					// Delete badge: only when selected and deletion is wired up.
					// The click must not reach the engine's drag/selection
					// handling, and it only opens the dialog.
					<Show when=move || selected.get() && has_delete>
						<button
							class="node-delete-badge"
							style=badge_style.clone()
							on:click=move |ev| {
								ev.stop_propagation();
								confirm.set(ConfirmState::ConfirmingDelete);
							}
						>
							"×"
						</button>
					</Show>

					{anchor_layout()
						.map(|(side, role)| view! { <ConnectionHandle side=side role=role /> })
						.collect_view()}

					<div
						class="node-body"
						style="cursor: pointer;"
						on:dblclick={
							let record = record.clone();
							move |_| {
								if let Some(open) = on_double_click {
									open.run(record.clone());
								}
							}
						}
					>
						{icon_area}
					</div>

					<DeleteConfirmDialog state=confirm on_confirm=on_delete />
				</div>
			}
			.into_any()
		}
	}
}
