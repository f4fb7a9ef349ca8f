//! Cloud service node component for the diagram canvas.
//!
//! Renders one service node with:
//! - A provider-colored icon area resolved through lookup tables
//! - Four bidirectional connection anchors (a source + target pair per side)
//! - A selection ring, and a delete badge gated behind a confirmation dialog
//! - A minimal placeholder for absent or malformed records
//!
//! # Example
//!
//! ```ignore
//! use cloud_canvas_node::{NodePayload, ServiceNode, ServiceNodeData};
//!
//! let record = ServiceNodeData {
//!     id: "s3".into(),
//!     provider: "aws".into(),
//!     name: "Asset bucket".into(),
//!     ..Default::default()
//! };
//!
//! view! { <ServiceNode data=NodePayload::from(record) selected=selected_signal /> }
//! ```

mod component;
mod dialog;
mod handle;
mod icons;
pub mod theme;
mod types;

pub use component::ServiceNode;
pub use dialog::{ConfirmState, DeleteConfirmDialog};
pub use handle::{anchor_layout, ConnectionHandle, HandleRole, HandleSide};
pub use icons::{default_icon, is_image_icon, resolve_icon, GENERIC_ICON};
pub use theme::provider_color;
pub use types::{DiagramData, NodePayload, PlacedNode, ServiceNodeData};
