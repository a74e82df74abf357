use catalogo_api::EntityService;
use catalogo_forms::CategoriaForm;
use catalogo_model::{Categoria, EntityId};
use tracing::{debug, info, instrument, warn};

use crate::confirm::Confirm;
use crate::form::FormState;
use crate::outcome::{DeleteOutcome, LoadState, SubmitOutcome};

/// View session for categories.
pub struct CategoriaManager<S> {
  service: S,
  load_state: LoadState,
  categorias: Vec<Categoria>,
  form: FormState<CategoriaForm>,
  error: Option<String>,
}

impl<S: EntityService<Categoria>> CategoriaManager<S> {
  pub fn new(service: S) -> Self {
    Self {
      service,
      load_state: LoadState::Idle,
      categorias: Vec::new(),
      form: FormState::default(),
      error: None,
    }
  }

  /// Create the session and run the initial load.
  pub async fn mount(service: S) -> Self {
    let mut manager = Self::new(service);
    manager.load().await;
    manager
  }

  /// Fetch every category, replacing the loaded collection.
  ///
  /// Clears the error slot first. On failure the collection is left empty
  /// and the error slot names the cause.
  #[instrument(name = "categorias_load", skip(self))]
  pub async fn load(&mut self) {
    self.load_state = LoadState::Loading;
    self.error = None;

    match self.service.get_all().await {
      Ok(categorias) => {
        debug!(count = categorias.len(), "categorias_loaded");
        self.categorias = categorias;
        self.load_state = LoadState::Loaded;
      }
      Err(e) => {
        warn!(error = %e, "categorias_load_failed");
        self.categorias.clear();
        self.error = Some(format!("failed to load categories: {}", e));
        self.load_state = LoadState::Failed;
      }
    }
  }

  /// "New" action.
  pub fn open_new(&mut self) {
    self.form.open_new();
  }

  /// "Edit" action on a record.
  pub fn edit(&mut self, categoria: &Categoria) {
    self.form.open_edit(categoria);
  }

  /// "Edit" action on a loaded record, by id. Returns false when no loaded
  /// category has that id.
  pub fn edit_by_id(&mut self, id: EntityId) -> bool {
    match self.find(id).cloned() {
      Some(categoria) => {
        self.edit(&categoria);
        true
      }
      None => false,
    }
  }

  /// "Cancel" action: hide and clear the form.
  pub fn cancel(&mut self) {
    self.form.reset();
  }

  pub fn set_nombre(&mut self, nombre: impl Into<String>) {
    self.form.fields_mut().nombre = nombre.into();
  }

  /// Validate, then create or update.
  ///
  /// On success the form is reset and the collection reloaded. On failure the
  /// form stays open with its values and the error slot is set.
  #[instrument(name = "categorias_submit", skip(self), fields(editing_id = ?self.form.editing_id()))]
  pub async fn submit(&mut self) -> SubmitOutcome {
    match self.form.write(&self.service).await {
      Ok(SubmitOutcome::Invalid) => {
        debug!(errors = %self.form.errors(), "categoria_form_invalid");
        SubmitOutcome::Invalid
      }
      Ok(outcome) => {
        info!(?outcome, "categoria_saved");
        self.form.reset();
        self.load().await;
        outcome
      }
      Err(e) => {
        warn!(error = %e, "categoria_save_failed");
        self.error = Some(format!("failed to save category: {}", e));
        SubmitOutcome::Failed
      }
    }
  }

  /// Delete a record after the user confirms, then reload.
  #[instrument(name = "categorias_delete", skip(self, confirm))]
  pub async fn delete<C: Confirm + ?Sized>(&mut self, id: EntityId, confirm: &C) -> DeleteOutcome {
    if !confirm.confirm(&format!("Delete category {}?", id)) {
      debug!("categoria_delete_cancelled");
      return DeleteOutcome::Cancelled;
    }

    match self.service.delete(id).await {
      Ok(()) => {
        info!("categoria_deleted");
        self.load().await;
        DeleteOutcome::Deleted(id)
      }
      Err(e) => {
        warn!(error = %e, "categoria_delete_failed");
        self.error = Some(format!("failed to delete category: {}", e));
        DeleteOutcome::Failed
      }
    }
  }

  /// Clear the error slot and nothing else.
  pub fn dismiss_error(&mut self) {
    self.error = None;
  }

  pub fn error(&self) -> Option<&str> {
    self.error.as_deref()
  }

  pub fn load_state(&self) -> LoadState {
    self.load_state
  }

  pub fn categorias(&self) -> &[Categoria] {
    &self.categorias
  }

  pub fn find(&self, id: EntityId) -> Option<&Categoria> {
    self.categorias.iter().find(|c| c.id == id)
  }

  /// Loaded without any record: the view shows its empty state.
  pub fn is_empty(&self) -> bool {
    self.load_state == LoadState::Loaded && self.categorias.is_empty()
  }

  pub fn form(&self) -> &FormState<CategoriaForm> {
    &self.form
  }
}
