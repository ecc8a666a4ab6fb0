//! Entry synchronizer: one request/response cycle per user action.
//!
//! Each function owns exactly one network exchange and reconciles the
//! confirmed result into the record store. Failures convert to a
//! user-facing [`Notice`] at this boundary; nothing propagates further and
//! nothing is retried. The collection is never touched on a failed call.

use rigdesk_client::CustomerBackend;
use rigdesk_core::RecordStore;

use crate::editor::{CardEditor, NewEntryEditor, SubmitBlocked};
use crate::notice::Notice;

/// Run one create cycle for the new-entry editor.
///
/// Returns `None` when the click was dropped by the re-entrancy guard,
/// otherwise the notice to show the user. On success the server-assigned
/// id is appended to the collection and the draft resets.
pub async fn create_entry(
    editor: &mut NewEntryEditor,
    backend: &dyn CustomerBackend,
    store: &mut RecordStore,
) -> Option<Notice> {
    let fields = match editor.begin_submit() {
        Ok(fields) => fields,
        Err(SubmitBlocked::InFlight) => return None,
        Err(SubmitBlocked::Validation(notice)) => return Some(notice),
    };

    match backend.create(&fields).await {
        Ok(id) => {
            tracing::info!(id, "Created customer");
            store.apply_insert(id, fields);
            editor.finish_success();
            Some(Notice::saved())
        }
        Err(e) => {
            tracing::warn!(error = %e, "Customer create failed");
            editor.finish_failure(&e.to_string());
            Some(Notice::save_failed(&e))
        }
    }
}

/// Run one update cycle for an open card editor.
///
/// Pessimistic: the collection is only mutated after the server confirms,
/// so a failed update cannot diverge local state from server truth. The
/// editor's id must come from the collection itself.
pub async fn update_entry(
    editor: &mut CardEditor,
    backend: &dyn CustomerBackend,
    store: &mut RecordStore,
) -> Option<Notice> {
    let fields = match editor.begin_submit() {
        Ok(fields) => fields,
        Err(SubmitBlocked::InFlight) => return None,
        Err(SubmitBlocked::Validation(notice)) => return Some(notice),
    };

    let id = editor.id();
    match backend.update(id, &fields).await {
        Ok(()) => {
            tracing::info!(id, "Updated customer");
            store.apply_update(id, fields);
            editor.finish_success();
            Some(Notice::saved())
        }
        Err(e) => {
            tracing::warn!(id, error = %e, "Customer update failed");
            editor.finish_failure(&e.to_string());
            Some(Notice::save_failed(&e))
        }
    }
}

/// Run one delete cycle for an open card editor.
///
/// Only proceeds when the editor holds an armed confirmation from the
/// prompt (and consumes it); an unconfirmed call is a no-op. A 404 from
/// the backend counts as success: the record is already gone and deleting
/// is idempotent.
pub async fn delete_entry(
    editor: &mut CardEditor,
    backend: &dyn CustomerBackend,
    store: &mut RecordStore,
) -> Option<Notice> {
    if !editor.take_delete_confirmation() {
        return None;
    }

    let id = editor.id();
    match backend.delete(id).await {
        Ok(()) => {
            tracing::info!(id, "Deleted customer");
            store.apply_delete(id);
            Some(Notice::deleted())
        }
        Err(e) if e.is_not_found() => {
            tracing::debug!(id, "Delete target already gone");
            store.apply_delete(id);
            Some(Notice::deleted())
        }
        Err(e) => {
            tracing::warn!(id, error = %e, "Customer delete failed");
            Some(Notice::delete_failed(&e))
        }
    }
}
