use std::collections::BTreeMap;
use std::fmt;

use crate::error::FieldError;

/// Form fields that carry validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
  Nombre,
  Precio,
  CategoriaId,
}

impl Field {
  /// Wire name of the field.
  pub fn name(self) -> &'static str {
    match self {
      Field::Nombre => "nombre",
      Field::Precio => "precio",
      Field::CategoriaId => "categoriaId",
    }
  }
}

impl fmt::Display for Field {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// Field → error mapping produced by validation. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
  errors: BTreeMap<Field, FieldError>,
}

impl FormErrors {
  pub fn new() -> Self {
    Self::default()
  }

  /// Record the outcome of one rule; `Ok` leaves the field absent.
  pub fn check(&mut self, field: Field, outcome: Result<(), FieldError>) {
    if let Err(error) = outcome {
      self.errors.insert(field, error);
    }
  }

  pub fn get(&self, field: Field) -> Option<FieldError> {
    self.errors.get(&field).copied()
  }

  /// No field failed: the form may be submitted.
  pub fn is_empty(&self) -> bool {
    self.errors.is_empty()
  }

  pub fn len(&self) -> usize {
    self.errors.len()
  }

  pub fn clear(&mut self) {
    self.errors.clear();
  }

  pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
    self.errors.iter().map(|(field, error)| (*field, *error))
  }
}

impl fmt::Display for FormErrors {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut first = true;
    for (field, error) in self.iter() {
      if !first {
        f.write_str("; ")?;
      }
      write!(f, "{}: {}", field, error)?;
      first = false;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_passing_rules_leave_map_empty() {
    let mut errors = FormErrors::new();
    errors.check(Field::Nombre, Ok(()));
    assert!(errors.is_empty());
    assert_eq!(errors.to_string(), "");
  }

  #[test]
  fn test_failures_listed_in_field_order() {
    let mut errors = FormErrors::new();
    errors.check(Field::CategoriaId, Err(FieldError::CategoriaRequired));
    errors.check(Field::Nombre, Err(FieldError::NombreRequired));

    assert!(!errors.is_empty());
    assert_eq!(errors.len(), 2);
    assert_eq!(
      errors.to_string(),
      "nombre: name is required; categoriaId: category is required"
    );
  }
}
