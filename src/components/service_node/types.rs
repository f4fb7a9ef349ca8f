//! Node data records and boundary validation.

use std::fmt;

use leptos::prelude::Callback;
use serde::Deserialize;

/// Data record for one cloud service node. Owned by the parent application;
/// the node component only reads it.
#[derive(Clone, Default, Deserialize)]
pub struct ServiceNodeData {
	/// Service type identifier (e.g. "lambda", "s3"). Drives the default
	/// glyph lookup.
	pub id: String,
	/// Cloud vendor identifier (e.g. "aws", "gcp"). Drives the color lookup.
	pub provider: String,
	/// Display label.
	pub name: String,
	/// Optional icon override: an inline glyph, or an absolute path to an
	/// image asset. Beats the id-based default when present and non-empty.
	pub icon: Option<String>,
	/// Parent-supplied delete callback. Presence alone gates whether the
	/// delete badge is shown. Never serialized; the parent injects it.
	#[serde(skip)]
	pub on_delete: Option<Callback<()>>,
}

impl fmt::Debug for ServiceNodeData {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ServiceNodeData")
			.field("id", &self.id)
			.field("provider", &self.provider)
			.field("name", &self.name)
			.field("icon", &self.icon)
			.field("on_delete", &self.on_delete.is_some())
			.finish()
	}
}

/// Node payload validated once at the boundary where the canvas engine
/// hands data in. The view renders `Invalid` as a minimal placeholder with
/// no handles, icon logic, or dialog.
#[derive(Clone, Debug)]
pub enum NodePayload {
	/// Structurally sound record.
	Valid(ServiceNodeData),
	/// Absent or malformed record.
	Invalid,
}

impl NodePayload {
	/// Validate a raw record. A record is malformed when it is absent or
	/// its service id is blank; everything else (unknown provider, missing
	/// icon, missing callbacks) degrades gracefully and stays valid.
	pub fn from_record(record: Option<ServiceNodeData>) -> Self {
		match record {
			Some(data) if !data.id.trim().is_empty() => Self::Valid(data),
			_ => Self::Invalid,
		}
	}

	pub fn is_valid(&self) -> bool {
		matches!(self, Self::Valid(_))
	}
}

impl From<ServiceNodeData> for NodePayload {
	fn from(record: ServiceNodeData) -> Self {
		Self::from_record(Some(record))
	}
}

/// One node placed on the board, as described by the host page.
#[derive(Clone, Debug, Deserialize)]
pub struct PlacedNode {
	/// Unique instance key on the board, distinct from the service id
	/// (a diagram may hold several nodes of the same service type).
	pub key: String,
	pub x: f64,
	pub y: f64,
	/// The service record rendered by the node component.
	pub node: ServiceNodeData,
}

/// Complete diagram payload the host page embeds as JSON.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct DiagramData {
	pub nodes: Vec<PlacedNode>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn absent_record_is_invalid() {
		assert!(!NodePayload::from_record(None).is_valid());
	}

	#[test]
	fn blank_id_is_invalid() {
		for id in ["", "   "] {
			let payload = NodePayload::from_record(Some(ServiceNodeData {
				id: id.to_string(),
				provider: "aws".to_string(),
				name: "Broken".to_string(),
				..Default::default()
			}));
			assert!(!payload.is_valid());
		}
	}

	#[test]
	fn well_formed_record_is_valid_and_preserved() {
		let payload = NodePayload::from(ServiceNodeData {
			id: "s3".to_string(),
			provider: "aws".to_string(),
			name: "Asset bucket".to_string(),
			..Default::default()
		});
		match payload {
			NodePayload::Valid(data) => {
				assert_eq!(data.id, "s3");
				assert_eq!(data.provider, "aws");
				assert_eq!(data.name, "Asset bucket");
				assert!(data.icon.is_none());
				assert!(data.on_delete.is_none());
			}
			NodePayload::Invalid => panic!("expected a valid payload"),
		}
	}

	#[test]
	fn unknown_provider_and_missing_icon_stay_valid() {
		let payload = NodePayload::from(ServiceNodeData {
			id: "droplet".to_string(),
			provider: "digitalocean".to_string(),
			name: "Web".to_string(),
			..Default::default()
		});
		assert!(payload.is_valid());
	}

	#[test]
	fn parses_diagram_json() {
		let json = r#"{
			"nodes": [
				{
					"key": "n1",
					"x": 40.0,
					"y": 80.0,
					"node": { "id": "lambda", "provider": "aws", "name": "Resize worker" }
				},
				{
					"key": "n2",
					"x": 220.0,
					"y": 80.0,
					"node": { "id": "s3", "provider": "aws", "name": "Uploads", "icon": "/icons/s3.png" }
				}
			]
		}"#;

		let data: DiagramData = serde_json::from_str(json).expect("diagram should parse");
		assert_eq!(data.nodes.len(), 2);
		assert_eq!(data.nodes[0].key, "n1");
		assert!(data.nodes[0].node.icon.is_none());
		assert!(data.nodes[0].node.on_delete.is_none());
		assert_eq!(data.nodes[1].node.icon.as_deref(), Some("/icons/s3.png"));
	}
}
