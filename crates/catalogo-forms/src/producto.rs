use catalogo_model::{Producto, ProductoPayload};

use crate::errors::{Field, FormErrors};
use crate::form::Form;
use crate::rules::{
  parse_categoria_id, parse_precio, validate_categoria_id, validate_nombre, validate_precio,
};

/// Create/edit form for a product. Every field holds raw user text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductoForm {
  pub nombre: String,
  pub precio: String,
  pub categoria_id: String,
}

impl Form for ProductoForm {
  type Entity = Producto;

  fn from_entity(producto: &Producto) -> Self {
    Self {
      nombre: producto.nombre.clone(),
      precio: producto
        .precio
        .map(|precio| precio.to_string())
        .unwrap_or_default(),
      categoria_id: producto
        .categoria_id
        .map(|id| id.to_string())
        .unwrap_or_default(),
    }
  }

  fn validate(&self) -> FormErrors {
    let mut errors = FormErrors::new();
    errors.check(Field::Nombre, validate_nombre(&self.nombre));
    errors.check(Field::Precio, validate_precio(&self.precio));
    errors.check(Field::CategoriaId, validate_categoria_id(&self.categoria_id));
    errors
  }

  fn to_payload(&self) -> Result<ProductoPayload, FormErrors> {
    let nombre = validate_nombre(&self.nombre);
    let precio = parse_precio(&self.precio);
    let categoria_id = parse_categoria_id(&self.categoria_id);

    match (nombre, precio, categoria_id) {
      (Ok(()), Ok(precio), Ok(categoria_id)) => Ok(ProductoPayload {
        nombre: self.nombre.trim().to_string(),
        precio,
        categoria_id,
      }),
      _ => Err(self.validate()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::FieldError;

  fn form(nombre: &str, precio: &str, categoria_id: &str) -> ProductoForm {
    ProductoForm {
      nombre: nombre.to_string(),
      precio: precio.to_string(),
      categoria_id: categoria_id.to_string(),
    }
  }

  #[test]
  fn test_empty_form_reports_every_field() {
    let errors = ProductoForm::default().validate();
    assert_eq!(errors.get(Field::Nombre), Some(FieldError::NombreRequired));
    assert_eq!(errors.get(Field::Precio), Some(FieldError::PrecioRequired));
    assert_eq!(
      errors.get(Field::CategoriaId),
      Some(FieldError::CategoriaRequired)
    );
  }

  #[test]
  fn test_valid_form_builds_parsed_payload() {
    let payload = form(" Agua mineral ", "2.50", "3").to_payload().unwrap();
    assert_eq!(
      payload,
      ProductoPayload {
        nombre: "Agua mineral".to_string(),
        precio: 2.5,
        categoria_id: 3,
      }
    );
  }

  #[test]
  fn test_unknown_category_id_is_still_valid() {
    assert!(form("Agua", "1", "999").validate().is_empty());
  }

  #[test]
  fn test_only_failing_fields_are_present() {
    let errors = form("Agua", "0", "3").validate();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(Field::Precio), Some(FieldError::PrecioNotPositive));
    assert_eq!(errors.get(Field::Nombre), None);
  }

  #[test]
  fn test_from_entity_round_trips_into_valid_form() {
    let producto = Producto {
      id: 10,
      nombre: "Agua".to_string(),
      precio: Some(12.5),
      categoria_id: Some(2),
    };
    let form = ProductoForm::from_entity(&producto);
    assert_eq!(form.precio, "12.5");
    assert_eq!(form.categoria_id, "2");
    assert!(form.validate().is_empty());
  }

  #[test]
  fn test_from_entity_without_category_needs_one() {
    let producto = Producto {
      id: 10,
      nombre: "Agua".to_string(),
      precio: Some(1.0),
      categoria_id: None,
    };
    let form = ProductoForm::from_entity(&producto);
    assert_eq!(form.categoria_id, "");
    assert_eq!(
      form.validate().get(Field::CategoriaId),
      Some(FieldError::CategoriaRequired)
    );
  }

  #[test]
  fn test_from_entity_without_price_asks_for_one() {
    let producto = Producto {
      id: 10,
      nombre: "Agua".to_string(),
      precio: None,
      categoria_id: Some(2),
    };
    let form = ProductoForm::from_entity(&producto);
    assert_eq!(form.precio, "");
    assert_eq!(
      form.validate().get(Field::Precio),
      Some(FieldError::PrecioRequired)
    );
  }
}
