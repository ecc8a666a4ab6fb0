//! Draft editors: the per-card state the UI binds to.
//!
//! An editor pairs a [`Draft`] with its submit state machine and exposes
//! the hooks the presentation layer wires to its controls: `field_change`,
//! the synchronous half of `submit`, `cancel`, and (for existing records)
//! the delete confirmation flow. The async halves live in
//! [`crate::submit`].

use rigdesk_core::{CustomerFields, CustomerId, Draft};

use crate::notice::{Notice, MSG_FILL_ALL, MSG_FIX_ERRORS};
use crate::state::SubmitState;

/// Why a submit click did not start a request.
#[derive(Debug, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// A previous submission is still in flight. The triggering control is
    /// disabled, so the click is dropped without feedback.
    InFlight,
    /// The draft failed the pre-submission guard; no network call is made.
    Validation(Notice),
}

/// Shared synchronous submit path: the re-entrancy guard, then the
/// validation guards, then the transition to `Submitting`.
fn run_submit_guards(
    state: &mut SubmitState,
    draft: &Draft,
) -> Result<CustomerFields, SubmitBlocked> {
    if state.is_submitting() {
        return Err(SubmitBlocked::InFlight);
    }
    if draft.has_blank_required() {
        return Err(block_on_validation(state, MSG_FILL_ALL));
    }
    if draft.has_errors() {
        return Err(block_on_validation(state, MSG_FIX_ERRORS));
    }
    match draft.to_fields() {
        Ok(fields) => {
            *state = SubmitState::Submitting;
            Ok(fields)
        }
        Err(_) => Err(block_on_validation(state, MSG_FIX_ERRORS)),
    }
}

fn block_on_validation(state: &mut SubmitState, message: &str) -> SubmitBlocked {
    *state = SubmitState::Failed(message.to_string());
    SubmitBlocked::Validation(Notice::validation(message))
}

/// Editor state for the "add new customer" form.
#[derive(Debug)]
pub struct NewEntryEditor {
    draft: Draft,
    state: SubmitState,
}

impl Default for NewEntryEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl NewEntryEditor {
    pub fn new() -> Self {
        Self {
            draft: Draft::new_entry(),
            state: SubmitState::Idle,
        }
    }

    /// The draft the form renders from.
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    /// `onFieldChange`: record the keystroke and revalidate that field.
    pub fn field_change(&mut self, name: &str, value: &str) {
        self.draft.set_field(name, value);
    }

    /// Whether the save control should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.state.is_submitting()
    }

    /// Synchronous half of `onSubmit`: runs the re-entrancy and validation
    /// guards and transitions to `Submitting`.
    ///
    /// The backend has no idempotency key, so a second click while a
    /// create is in flight must never issue a second request.
    pub fn begin_submit(&mut self) -> Result<CustomerFields, SubmitBlocked> {
        run_submit_guards(&mut self.state, &self.draft)
    }

    /// Reconcile a confirmed create: the draft resets for the next entry.
    ///
    /// Called by the entry synchronizer once the backend confirms.
    pub fn finish_success(&mut self) {
        self.draft = Draft::new_entry();
        self.state = SubmitState::Succeeded;
    }

    /// Record a failed attempt. The draft is kept so the user can retry.
    pub fn finish_failure(&mut self, detail: &str) {
        self.state = SubmitState::Failed(detail.to_string());
    }

    /// `onCancel`: discard the draft and start over.
    pub fn cancel(&mut self) {
        self.draft = Draft::new_entry();
        self.state = SubmitState::Idle;
    }
}

/// Editor state for one existing customer's card.
///
/// Carries the edit draft plus the delete confirmation flow: a delete
/// request only opens the prompt, and the actual request is armed solely by
/// an explicit confirmation.
#[derive(Debug)]
pub struct CardEditor {
    id: CustomerId,
    draft: Draft,
    state: SubmitState,
    delete_prompt_open: bool,
    delete_confirmed: bool,
}

impl CardEditor {
    /// Open an editor over an existing record.
    pub fn open(id: CustomerId, fields: &CustomerFields) -> Self {
        Self {
            id,
            draft: Draft::from_fields(fields),
            state: SubmitState::Idle,
            delete_prompt_open: false,
            delete_confirmed: false,
        }
    }

    /// Identifier of the record this editor is bound to.
    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    /// `onFieldChange`: record the keystroke and revalidate that field.
    pub fn field_change(&mut self, name: &str, value: &str) {
        self.draft.set_field(name, value);
    }

    /// Whether the save control should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.state.is_submitting()
    }

    /// Synchronous half of `onSubmit` for an update; same guards as create.
    pub fn begin_submit(&mut self) -> Result<CustomerFields, SubmitBlocked> {
        run_submit_guards(&mut self.state, &self.draft)
    }

    /// Reconcile a confirmed update. The draft keeps the saved values.
    pub fn finish_success(&mut self) {
        self.state = SubmitState::Succeeded;
    }

    /// Record a failed attempt. The draft is kept so the user can retry.
    pub fn finish_failure(&mut self, detail: &str) {
        self.state = SubmitState::Failed(detail.to_string());
    }

    /// `onDeleteRequested`: open the confirmation prompt. No request is
    /// issued yet.
    pub fn request_delete(&mut self) {
        self.delete_prompt_open = true;
    }

    /// Dismiss the prompt without deleting.
    pub fn cancel_delete(&mut self) {
        self.delete_prompt_open = false;
    }

    /// `onDeleteConfirmed`: arm the deletion and close the prompt. Ignored
    /// unless the prompt is actually open, so the confirmation step cannot
    /// be skipped.
    pub fn confirm_delete(&mut self) {
        if self.delete_prompt_open {
            self.delete_confirmed = true;
            self.delete_prompt_open = false;
        }
    }

    /// Whether the confirmation prompt is showing.
    pub fn delete_prompt_open(&self) -> bool {
        self.delete_prompt_open
    }

    /// Consume the armed confirmation. The synchronizer calls this before
    /// issuing the request, so an unconfirmed delete never reaches the
    /// network.
    pub fn take_delete_confirmation(&mut self) -> bool {
        std::mem::take(&mut self.delete_confirmed)
    }
}
