use catalogo_model::{Categoria, CategoriaPayload};

use crate::errors::{Field, FormErrors};
use crate::form::Form;
use crate::rules::validate_nombre;

/// Create/edit form for a category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoriaForm {
  pub nombre: String,
}

impl Form for CategoriaForm {
  type Entity = Categoria;

  fn from_entity(categoria: &Categoria) -> Self {
    Self {
      nombre: categoria.nombre.clone(),
    }
  }

  fn validate(&self) -> FormErrors {
    let mut errors = FormErrors::new();
    errors.check(Field::Nombre, validate_nombre(&self.nombre));
    errors
  }

  fn to_payload(&self) -> Result<CategoriaPayload, FormErrors> {
    let errors = self.validate();
    if !errors.is_empty() {
      return Err(errors);
    }
    Ok(CategoriaPayload {
      nombre: self.nombre.trim().to_string(),
    })
  }
}
