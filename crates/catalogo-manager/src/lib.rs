//! Catalogo Manager
//!
//! One manager per view session. A manager owns everything the view shows:
//! the loaded collection(s), the create/edit form and a single error slot.
//! The server stays the source of truth; every successful write is followed
//! by a full reload instead of a local merge.
//!
//! ```text
//!   mount ──► Loading ──► Loaded | Failed(error slot set, collection empty)
//!
//!   form:  Hidden ──new──► Creating ──submit ok──► Hidden + reload
//!             └────edit──► Editing(id) ─submit err─► (stays open, error slot set)
//! ```
//!
//! Validation failures stay on the form and never reach the network. Network
//! failures overwrite the error slot and leave the form untouched.

mod categoria;
mod confirm;
mod form;
mod integrity;
mod outcome;
mod producto;

pub use categoria::CategoriaManager;
pub use confirm::{AssumeYes, Confirm};
pub use form::{FormOverlay, FormState};
pub use integrity::{CategoriaIndex, CategoriaRef, ORPHAN_WARNING, has_orphans};
pub use outcome::{DeleteOutcome, LoadState, SubmitOutcome};
pub use producto::{ProductoManager, ProductoRow};
