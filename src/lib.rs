//! cloud-canvas-node: draggable cloud service nodes for an architecture
//! diagram canvas.
//!
//! This crate provides the node component itself plus a thin CSR shell that
//! stands in for the parent application: it loads a diagram description
//! from the host page, tracks which node is selected, and supplies the
//! delete and double-click callbacks the nodes invoke. Positioning, edge
//! drawing, and drag handling belong to the canvas engine the component
//! plugs into.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::service_node::{
	ConnectionHandle, DeleteConfirmDialog, DiagramData, HandleRole, HandleSide, NodePayload,
	PlacedNode, ServiceNode, ServiceNodeData,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("cloud-canvas-node: logging initialized");
}

/// Load diagram data from a script element with id="diagram-data".
/// Expected format: JSON with { nodes: [{ key, x, y, node: {...} }] }
fn load_diagram_data() -> Option<DiagramData> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("diagram-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<DiagramData>(&json_text) {
		Ok(data) => {
			info!("cloud-canvas-node: loaded {} nodes", data.nodes.len());
			Some(data)
		}
		Err(e) => {
			warn!("cloud-canvas-node: failed to parse diagram data: {}", e);
			None
		}
	}
}

/// Remove the node with the given board key.
fn remove_node(nodes: &mut Vec<PlacedNode>, key: &str) {
	nodes.retain(|placed| placed.key != key);
}

/// Fallback diagram shown when the host page embeds no data: a handful of
/// services covering the icon and color tables, an explicit-icon override,
/// and an unknown provider id.
fn sample_diagram() -> DiagramData {
	let services: [(&str, &str, &str, Option<&str>); 6] = [
		("lambda", "aws", "Resize worker", None),
		("s3", "aws", "Upload bucket", None),
		("rds", "aws", "Primary database", None),
		("cloud-run", "gcp", "API service", None),
		("postgres", "supabase", "Auth store", None),
		("billing", "stripe", "Billing", Some("💳")),
	];

	let nodes = services
		.into_iter()
		.enumerate()
		.map(|(i, (id, provider, name, icon))| PlacedNode {
			key: format!("node-{}", i),
			x: 80.0 + 160.0 * (i % 3) as f64,
			y: 120.0 + 180.0 * (i / 3) as f64,
			node: ServiceNodeData {
				id: id.to_string(),
				provider: provider.to_string(),
				name: name.to_string(),
				icon: icon.map(str::to_string),
				on_delete: None,
			},
		})
		.collect();

	DiagramData { nodes }
}

/// Main application component: a board of service nodes.
///
/// The board stands in for the parent controller. It owns the node list and
/// the selection, injects a delete callback into each record, and logs
/// double-clicks where a real application would open a details panel.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let diagram = load_diagram_data().unwrap_or_else(sample_diagram);
	let nodes = RwSignal::new(diagram.nodes);
	let selected = RwSignal::new(None::<String>);

	let open_details = Callback::new(|data: ServiceNodeData| {
		info!(
			"cloud-canvas-node: open details for {} ({}/{})",
			data.name, data.provider, data.id
		);
	});

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />
		<Title text="Cloud Service Diagram" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div
			class="diagram-board"
			style="position: relative; width: 100vw; height: 100vh; overflow: hidden;"
			on:click=move |_| selected.set(None)
		>
			<For
				each=move || nodes.get()
				key=|placed| placed.key.clone()
				children=move |placed| {
					let key = placed.key.clone();
					let select_key = key.clone();
					let delete_key = key.clone();

					let record = ServiceNodeData {
						on_delete: Some(Callback::new(move |_| {
							info!("cloud-canvas-node: removing node {}", delete_key);
							nodes.update(|list| remove_node(list, &delete_key));
							selected.update(|sel| {
								if sel.as_deref() == Some(delete_key.as_str()) {
									*sel = None;
								}
							});
						})),
						..placed.node.clone()
					};
					let payload = NodePayload::from(record);
					let data = Signal::derive(move || payload.clone());
					let is_selected = Signal::derive(move || {
						selected.get().as_deref() == Some(select_key.as_str())
					});

					view! {
						<div
							class="board-node"
							style=format!(
								"position: absolute; left: {}px; top: {}px;",
								placed.x, placed.y,
							)
							on:click=move |ev| {
								ev.stop_propagation();
								selected.set(Some(key.clone()));
							}
						>
							<ServiceNode data=data selected=is_selected on_double_click=open_details />
						</div>
					}
				}
			/>

			<div
				class="board-overlay"
				style="position: absolute; top: 16px; left: 16px; pointer-events: none;"
			>
				<h1 style="margin: 0; font-size: 20px;">"Cloud Service Diagram"</h1>
				<p class="subtitle" style="margin: 4px 0 0; font-size: 13px; color: #6b7280;">
					"Click a node to select it. Double-click to open details."
				</p>
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn remove_node_drops_only_the_matching_key() {
		let mut nodes = sample_diagram().nodes;
		let before = nodes.len();

		remove_node(&mut nodes, "node-1");
		assert_eq!(nodes.len(), before - 1);
		assert!(nodes.iter().all(|placed| placed.key != "node-1"));

		remove_node(&mut nodes, "no-such-key");
		assert_eq!(nodes.len(), before - 1);
	}

	#[test]
	fn sample_diagram_keys_are_unique() {
		let nodes = sample_diagram().nodes;
		let mut keys: Vec<_> = nodes.iter().map(|placed| placed.key.clone()).collect();
		keys.sort();
		keys.dedup();
		assert_eq!(keys.len(), nodes.len());
	}
}
