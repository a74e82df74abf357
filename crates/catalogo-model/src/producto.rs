use serde::{Deserialize, Serialize};

use crate::categoria::Categoria;
use crate::entity::{Entity, EntityId, null_as_default};

/// A product as listed by `GET /productos`.
///
/// The server does not require a name or a price, so both may come back
/// null. A missing name reads as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Producto {
  pub id: EntityId,
  #[serde(default, deserialize_with = "null_as_default")]
  pub nombre: String,
  #[serde(default)]
  pub precio: Option<f64>,
  /// Soft reference to [`Categoria::id`]. The server stores it nullable and
  /// never checks that the category exists.
  #[serde(default)]
  pub categoria_id: Option<EntityId>,
}

/// Body of `POST /productos` and `PUT /productos/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductoPayload {
  pub nombre: String,
  pub precio: f64,
  pub categoria_id: EntityId,
}

/// A product together with the category the product service resolved for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductoDetalle {
  pub producto: Producto,
  #[serde(default)]
  pub categoria: Option<Categoria>,
}

/// Body of `GET /productos/{id}`.
///
/// The product service answers with a [`ProductoDetalle`]; a bare product is
/// accepted too.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ProductoLookup {
  Detalle(ProductoDetalle),
  Plano(Producto),
}

impl ProductoLookup {
  pub fn into_detalle(self) -> ProductoDetalle {
    match self {
      ProductoLookup::Detalle(detalle) => detalle,
      ProductoLookup::Plano(producto) => ProductoDetalle {
        producto,
        categoria: None,
      },
    }
  }
}

impl From<ProductoLookup> for Producto {
  fn from(lookup: ProductoLookup) -> Self {
    lookup.into_detalle().producto
  }
}

impl Entity for Producto {
  type Payload = ProductoPayload;
  type Lookup = ProductoLookup;

  const RESOURCE: &'static str = "productos";

  fn id(&self) -> EntityId {
    self.id
  }
}
