//! Client-side state synchronization for the customer directory.
//!
//! Wires the pure core (schema, validator, store) to a backend adapter:
//! draft editors hold the per-card form state, the entry synchronizer runs
//! one request/response cycle per user action, and the directory owns the
//! collection plus the liveness-guarded initial load.
//!
//! Everything here runs as a single logical flow per action on the
//! embedding event loop; network calls suspend only the flow that issued
//! them. The collection is mutated exclusively after a confirmed server
//! response, so a failed call never corrupts local state.

pub mod directory;
pub mod editor;
pub mod notice;
pub mod state;
pub mod submit;

pub use directory::{Directory, Liveness, LivenessToken, LoadState};
pub use editor::{CardEditor, NewEntryEditor, SubmitBlocked};
pub use notice::Notice;
pub use state::SubmitState;
pub use submit::{create_entry, delete_entry, update_entry};
