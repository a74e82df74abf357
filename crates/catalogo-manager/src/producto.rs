use catalogo_api::EntityService;
use catalogo_forms::ProductoForm;
use catalogo_model::{Categoria, EntityId, Producto};
use tracing::{debug, info, instrument, warn};

use crate::confirm::Confirm;
use crate::form::FormState;
use crate::integrity::{CategoriaIndex, ORPHAN_WARNING};
use crate::outcome::{DeleteOutcome, LoadState, SubmitOutcome};

/// One product as the table shows it.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductoRow {
  pub id: EntityId,
  pub nombre: String,
  pub precio: Option<f64>,
  /// Category name, or a placeholder naming the raw id.
  pub categoria: String,
  /// The category reference did not resolve; render the row distinctly.
  pub orphaned: bool,
}

impl ProductoRow {
  /// Price with two decimals; a missing price shows as `0.00`.
  pub fn precio_label(&self) -> String {
    format!("{:.2}", self.precio.unwrap_or_default())
  }
}

/// View session for products. Products are shown against the loaded
/// categories, so both collections load together.
pub struct ProductoManager<P, C> {
  productos_service: P,
  categorias_service: C,
  load_state: LoadState,
  productos: Vec<Producto>,
  categorias: Vec<Categoria>,
  form: FormState<ProductoForm>,
  error: Option<String>,
}

impl<P, C> ProductoManager<P, C>
where
  P: EntityService<Producto>,
  C: EntityService<Categoria>,
{
  pub fn new(productos_service: P, categorias_service: C) -> Self {
    Self {
      productos_service,
      categorias_service,
      load_state: LoadState::Idle,
      productos: Vec::new(),
      categorias: Vec::new(),
      form: FormState::default(),
      error: None,
    }
  }

  /// Create the session and run the initial load.
  pub async fn mount(productos_service: P, categorias_service: C) -> Self {
    let mut manager = Self::new(productos_service, categorias_service);
    manager.load().await;
    manager
  }

  /// Fetch products and categories concurrently.
  ///
  /// Both requests run to completion before the state changes. If either
  /// fails, the whole load fails: both collections are emptied and the error
  /// slot carries every failure.
  #[instrument(name = "productos_load", skip(self))]
  pub async fn load(&mut self) {
    self.load_state = LoadState::Loading;
    self.error = None;

    let (productos, categorias) = futures::join!(
      self.productos_service.get_all(),
      self.categorias_service.get_all()
    );

    match (productos, categorias) {
      (Ok(productos), Ok(categorias)) => {
        debug!(
          productos = productos.len(),
          categorias = categorias.len(),
          "productos_loaded"
        );
        self.productos = productos;
        self.categorias = categorias;
        self.load_state = LoadState::Loaded;
      }
      (productos, categorias) => {
        let failures: Vec<String> = [
          productos.err().map(|e| format!("products: {}", e)),
          categorias.err().map(|e| format!("categories: {}", e)),
        ]
        .into_iter()
        .flatten()
        .collect();

        warn!(errors = ?failures, "productos_load_failed");
        self.productos.clear();
        self.categorias.clear();
        self.error = Some(format!("failed to load data: {}", failures.join("; ")));
        self.load_state = LoadState::Failed;
      }
    }
  }

  /// "New" action.
  pub fn open_new(&mut self) {
    self.form.open_new();
  }

  /// "Edit" action on a record.
  pub fn edit(&mut self, producto: &Producto) {
    self.form.open_edit(producto);
  }

  /// "Edit" action on a loaded record, by id. Returns false when no loaded
  /// product has that id.
  pub fn edit_by_id(&mut self, id: EntityId) -> bool {
    match self.find(id).cloned() {
      Some(producto) => {
        self.edit(&producto);
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

  pub fn set_precio(&mut self, precio: impl Into<String>) {
    self.form.fields_mut().precio = precio.into();
  }

  pub fn set_categoria_id(&mut self, categoria_id: impl Into<String>) {
    self.form.fields_mut().categoria_id = categoria_id.into();
  }

  /// Validate, then create or update.
  ///
  /// The category id is only checked for presence and format; pointing at a
  /// category that does not exist is allowed and shows up as an orphan.
  #[instrument(name = "productos_submit", skip(self), fields(editing_id = ?self.form.editing_id()))]
  pub async fn submit(&mut self) -> SubmitOutcome {
    match self.form.write(&self.productos_service).await {
      Ok(SubmitOutcome::Invalid) => {
        debug!(errors = %self.form.errors(), "producto_form_invalid");
        SubmitOutcome::Invalid
      }
      Ok(outcome) => {
        info!(?outcome, "producto_saved");
        self.form.reset();
        self.load().await;
        outcome
      }
      Err(e) => {
        warn!(error = %e, "producto_save_failed");
        self.error = Some(format!("failed to save product: {}", e));
        SubmitOutcome::Failed
      }
    }
  }

  /// Delete a record after the user confirms, then reload.
  #[instrument(name = "productos_delete", skip(self, confirm))]
  pub async fn delete<K: Confirm + ?Sized>(&mut self, id: EntityId, confirm: &K) -> DeleteOutcome {
    if !confirm.confirm(&format!("Delete product {}?", id)) {
      debug!("producto_delete_cancelled");
      return DeleteOutcome::Cancelled;
    }

    match self.productos_service.delete(id).await {
      Ok(()) => {
        info!("producto_deleted");
        self.load().await;
        DeleteOutcome::Deleted(id)
      }
      Err(e) => {
        warn!(error = %e, "producto_delete_failed");
        self.error = Some(format!("failed to delete product: {}", e));
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

  pub fn productos(&self) -> &[Producto] {
    &self.productos
  }

  pub fn categorias(&self) -> &[Categoria] {
    &self.categorias
  }

  /// Choices for the form's category picker: id and name of every loaded
  /// category.
  pub fn categoria_options(&self) -> Vec<(EntityId, &str)> {
    self
      .categorias
      .iter()
      .map(|c| (c.id, c.nombre.as_str()))
      .collect()
  }

  pub fn find(&self, id: EntityId) -> Option<&Producto> {
    self.productos.iter().find(|p| p.id == id)
  }

  /// Loaded without any product: the view shows its empty state.
  pub fn is_empty(&self) -> bool {
    self.load_state == LoadState::Loaded && self.productos.is_empty()
  }

  pub fn form(&self) -> &FormState<ProductoForm> {
    &self.form
  }

  /// Table rows with every category reference resolved.
  pub fn rows(&self) -> Vec<ProductoRow> {
    let index = CategoriaIndex::new(&self.categorias);
    self
      .productos
      .iter()
      .map(|p| {
        let categoria = index.resolve(p.categoria_id);
        ProductoRow {
          id: p.id,
          nombre: p.nombre.clone(),
          precio: p.precio,
          categoria: categoria.to_string(),
          orphaned: !categoria.is_resolved(),
        }
      })
      .collect()
  }

  /// The single banner shown above the table when at least one loaded
  /// product has an unresolved category.
  pub fn orphan_warning(&self) -> Option<&'static str> {
    if self.load_state != LoadState::Loaded || self.productos.is_empty() {
      return None;
    }
    CategoriaIndex::new(&self.categorias)
      .any_orphaned(&self.productos)
      .then_some(ORPHAN_WARNING)
  }
}
