//! Form overlay state shared by every manager.

use catalogo_api::{ApiError, EntityService};
use catalogo_forms::{Form, FormErrors};
use catalogo_model::{Entity, EntityId};

use crate::outcome::SubmitOutcome;

/// Whether the create/edit form is shown, and for which record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormOverlay {
  #[default]
  Hidden,
  Creating,
  Editing(EntityId),
}

/// The form fields, their last validation errors and the overlay mode.
#[derive(Debug, Clone, Default)]
pub struct FormState<F> {
  overlay: FormOverlay,
  fields: F,
  errors: FormErrors,
}

impl<F: Form> FormState<F> {
  /// "New" action: empty fields, no errors, no record being edited.
  pub fn open_new(&mut self) {
    self.fields = F::default();
    self.errors.clear();
    self.overlay = FormOverlay::Creating;
  }

  /// "Edit" action: fields copied from the record.
  pub fn open_edit(&mut self, entity: &F::Entity) {
    self.fields = F::from_entity(entity);
    self.errors.clear();
    self.overlay = FormOverlay::Editing(entity.id());
  }

  /// Back to hidden with empty fields.
  pub fn reset(&mut self) {
    self.fields = F::default();
    self.errors.clear();
    self.overlay = FormOverlay::Hidden;
  }

  pub fn overlay(&self) -> FormOverlay {
    self.overlay
  }

  pub fn is_open(&self) -> bool {
    self.overlay != FormOverlay::Hidden
  }

  pub fn editing_id(&self) -> Option<EntityId> {
    match self.overlay {
      FormOverlay::Editing(id) => Some(id),
      _ => None,
    }
  }

  pub fn fields(&self) -> &F {
    &self.fields
  }

  pub fn fields_mut(&mut self) -> &mut F {
    &mut self.fields
  }

  pub fn errors(&self) -> &FormErrors {
    &self.errors
  }

  /// Validate and send the form: update when editing, create otherwise.
  ///
  /// Field errors are stored on the form and nothing is sent when the form
  /// is invalid. The fields are left as they are either way.
  pub(crate) async fn write<S>(&mut self, service: &S) -> Result<SubmitOutcome, ApiError>
  where
    S: EntityService<F::Entity> + ?Sized,
  {
    let payload = match self.fields.to_payload() {
      Ok(payload) => payload,
      Err(errors) => {
        self.errors = errors;
        return Ok(SubmitOutcome::Invalid);
      }
    };
    self.errors.clear();

    match self.editing_id() {
      Some(id) => {
        service.update(id, &payload).await?;
        Ok(SubmitOutcome::Updated(id))
      }
      None => {
        let created = service.create(&payload).await?;
        Ok(SubmitOutcome::Created(created.id()))
      }
    }
  }
}
