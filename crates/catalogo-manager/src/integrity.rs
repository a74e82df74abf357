//! Resolution of a product's soft category reference.
//!
//! A product may point at a category that is not loaded (deleted, or never
//! created). That is a tolerated state: the row still renders, with a
//! placeholder that names the raw id, and the view shows one warning banner.

use std::collections::HashMap;
use std::fmt;

use catalogo_model::{Categoria, EntityId, Producto};

/// Banner shown above the product table when any product is orphaned.
pub const ORPHAN_WARNING: &str = "Warning: some products reference categories that do not exist. \
   Create the missing categories or update the products.";

/// What a product's `categoriaId` resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoriaRef<'a> {
  Resolved(&'a Categoria),
  /// The id matches no loaded category.
  Missing(EntityId),
  /// The product has no category id at all.
  Unassigned,
}

impl CategoriaRef<'_> {
  pub fn is_resolved(&self) -> bool {
    matches!(self, CategoriaRef::Resolved(_))
  }
}

impl fmt::Display for CategoriaRef<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      CategoriaRef::Resolved(categoria) => f.write_str(&categoria.nombre),
      CategoriaRef::Missing(id) => write!(f, "Category ID: {} (not found)", id),
      CategoriaRef::Unassigned => f.write_str("No category"),
    }
  }
}

/// Loaded categories keyed by id, built once per render.
#[derive(Debug, Clone, Default)]
pub struct CategoriaIndex<'a> {
  by_id: HashMap<EntityId, &'a Categoria>,
}

impl<'a> CategoriaIndex<'a> {
  pub fn new(categorias: &'a [Categoria]) -> Self {
    Self {
      by_id: categorias.iter().map(|c| (c.id, c)).collect(),
    }
  }

  pub fn resolve(&self, categoria_id: Option<EntityId>) -> CategoriaRef<'a> {
    match categoria_id {
      None => CategoriaRef::Unassigned,
      Some(id) => match self.by_id.get(&id) {
        Some(categoria) => CategoriaRef::Resolved(*categoria),
        None => CategoriaRef::Missing(id),
      },
    }
  }

  /// Whether at least one product fails to resolve.
  pub fn any_orphaned(&self, productos: &[Producto]) -> bool {
    productos
      .iter()
      .any(|p| !self.resolve(p.categoria_id).is_resolved())
  }
}

/// Aggregate warning predicate over a product list.
pub fn has_orphans(productos: &[Producto], categorias: &[Categoria]) -> bool {
  CategoriaIndex::new(categorias).any_orphaned(productos)
}
