use catalogo_model::Entity;

use crate::errors::FormErrors;

/// Editable text state for one record type.
///
/// `Default` is the empty form shown by the "new" action.
pub trait Form: Default + Clone + Send + Sync {
  type Entity: Entity;

  /// Pre-fill the form from an existing record (the "edit" action).
  fn from_entity(entity: &Self::Entity) -> Self;

  /// Run every field rule.
  fn validate(&self) -> FormErrors;

  /// Build the write body, or the errors that block submission.
  fn to_payload(&self) -> Result<<Self::Entity as Entity>::Payload, FormErrors>;
}
