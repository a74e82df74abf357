//! Field rules shared by every form.

use catalogo_model::EntityId;

use crate::error::FieldError;

/// Shortest accepted name, counted in characters after trimming.
pub const MIN_NOMBRE_CHARS: usize = 3;

/// `nombre`: required, and at least [`MIN_NOMBRE_CHARS`] once trimmed.
pub fn validate_nombre(value: &str) -> Result<(), FieldError> {
  let trimmed = value.trim();
  if trimmed.is_empty() {
    return Err(FieldError::NombreRequired);
  }
  if trimmed.chars().count() < MIN_NOMBRE_CHARS {
    return Err(FieldError::NombreTooShort {
      min: MIN_NOMBRE_CHARS,
    });
  }
  Ok(())
}

/// `precio`: required, finite and strictly positive.
pub fn parse_precio(value: &str) -> Result<f64, FieldError> {
  let trimmed = value.trim();
  if trimmed.is_empty() {
    return Err(FieldError::PrecioRequired);
  }
  match trimmed.parse::<f64>() {
    Ok(precio) if precio.is_finite() && precio > 0.0 => Ok(precio),
    _ => Err(FieldError::PrecioNotPositive),
  }
}

pub fn validate_precio(value: &str) -> Result<(), FieldError> {
  parse_precio(value).map(|_| ())
}

/// `categoriaId`: required and numeric. Whether the category exists is not
/// checked here.
pub fn parse_categoria_id(value: &str) -> Result<EntityId, FieldError> {
  let trimmed = value.trim();
  if trimmed.is_empty() {
    return Err(FieldError::CategoriaRequired);
  }
  trimmed
    .parse::<EntityId>()
    .map_err(|_| FieldError::CategoriaNotNumeric)
}

pub fn validate_categoria_id(value: &str) -> Result<(), FieldError> {
  parse_categoria_id(value).map(|_| ())
}
