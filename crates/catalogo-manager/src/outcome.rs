use catalogo_model::EntityId;

/// Where the collection load of a session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
  /// Not mounted yet.
  #[default]
  Idle,
  Loading,
  Loaded,
  /// The load failed; the message is in the session error slot.
  Failed,
}

/// Result of submitting the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
  /// Validation failed; field errors are on the form and nothing was sent.
  Invalid,
  Created(EntityId),
  Updated(EntityId),
  /// The write failed; the message is in the session error slot.
  Failed,
}

/// Result of a delete action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
  /// The user declined the confirmation; nothing was sent.
  Cancelled,
  Deleted(EntityId),
  /// The delete failed; the message is in the session error slot.
  Failed,
}
