//! Delete confirmation flow.
//!
//! Deleting a node is the one destructive action the component can trigger,
//! so it is gated behind an explicit modal: the delete badge only opens the
//! dialog, and the parent callback runs strictly after the user confirms.

use leptos::prelude::*;

use super::theme;

/// Confirmation state owned by one node instance.
///
/// An explicit enum rather than a bare boolean, so further confirmation
/// flows get their own variants instead of a second flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConfirmState {
	/// No dialog shown.
	#[default]
	Closed,
	/// Asking the user to confirm deletion of this node.
	ConfirmingDelete,
}

impl ConfirmState {
	pub fn is_open(self) -> bool {
		matches!(self, Self::ConfirmingDelete)
	}
}

/// Modal dialog shown before a node is deleted.
///
/// Cancel closes the dialog with no further effect. Delete runs
/// `on_confirm` once (when present), then closes. Both paths reset `state`
/// to [`ConfirmState::Closed`].
#[component]
pub fn DeleteConfirmDialog(
	state: RwSignal<ConfirmState>,
	on_confirm: Option<Callback<()>>,
) -> impl IntoView {
	let overlay_style = format!(
		"position: fixed; inset: 0; background-color: {}; \
		 display: flex; align-items: center; justify-content: center; z-index: 50;",
		theme::OVERLAY_COLOR.to_css(),
	);
	let confirm_style = format!(
		"padding: 8px 16px; border: none; border-radius: 6px; cursor: pointer; \
		 background-color: {}; color: #fff;",
		theme::DELETE_BADGE_COLOR.to_css(),
	);

	view! {
		<Show when=move || state.get().is_open()>
			<div class="confirm-overlay" style=overlay_style.clone()>
				<div
					class="confirm-panel"
					style="background-color: #fff; border-radius: 8px; padding: 24px; \
						max-width: 28rem; box-shadow: 0 10px 30px rgba(0, 0, 0, 0.2);"
				>
					<h2 style="margin: 0 0 8px; font-size: 18px;">"Delete Node"</h2>
					<p style="margin: 0 0 16px; font-size: 14px; color: #6b7280;">
						"Are you sure you want to delete this node? This action cannot be \
						undone and will also remove all connected edges."
					</p>
					<div
						class="confirm-actions"
						style="display: flex; justify-content: flex-end; gap: 8px;"
					>
						<button
							style="padding: 8px 16px; border: 1px solid #e5e7eb; \
								border-radius: 6px; cursor: pointer; background-color: #fff;"
							on:click=move |_| state.set(ConfirmState::Closed)
						>
							"Cancel"
						</button>
						<button
							style=confirm_style.clone()
							on:click=move |_| {
								if let Some(confirm) = on_confirm {
									confirm.run(());
								}
								state.set(ConfirmState::Closed);
							}
						>
							"Delete Node"
						</button>
					</div>
				</div>
			</div>
		</Show>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn starts_closed() {
		assert_eq!(ConfirmState::default(), ConfirmState::Closed);
		assert!(!ConfirmState::default().is_open());
	}

	#[test]
	fn confirming_is_open() {
		assert!(ConfirmState::ConfirmingDelete.is_open());
	}
}
