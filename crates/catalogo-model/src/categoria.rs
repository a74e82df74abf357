use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityId, null_as_default};

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Categoria {
  pub id: EntityId,
  #[serde(default, deserialize_with = "null_as_default")]
  pub nombre: String,
}

/// Body of `POST /categorias` and `PUT /categorias/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoriaPayload {
  pub nombre: String,
}

impl Entity for Categoria {
  type Payload = CategoriaPayload;
  type Lookup = Categoria;

  const RESOURCE: &'static str = "categorias";

  fn id(&self) -> EntityId {
    self.id
  }
}
