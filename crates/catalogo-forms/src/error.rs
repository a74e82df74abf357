use thiserror::Error;

/// A single field-level validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
  #[error("name is required")]
  NombreRequired,

  #[error("name must be at least {min} characters")]
  NombreTooShort { min: usize },

  #[error("price is required")]
  PrecioRequired,

  #[error("price must be a number greater than 0")]
  PrecioNotPositive,

  #[error("category is required")]
  CategoriaRequired,

  #[error("category must be a numeric id")]
  CategoriaNotNumeric,
}
