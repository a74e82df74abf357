//! Catalogo Forms
//!
//! Pure, synchronous validation of create/edit form input. A form holds the
//! raw text the user typed; [`Form::validate`] maps it to [`FormErrors`], a
//! field → message mapping where an absent field means the field is valid.
//! A form is submittable only when that mapping is empty, and only then does
//! [`Form::to_payload`] produce the trimmed, parsed write body.
//!
//! No rule looks at loaded data: whether a product's category exists is a
//! display concern, not a submission one.

mod categoria;
mod error;
mod errors;
mod form;
mod producto;
mod rules;

pub use categoria::CategoriaForm;
pub use error::FieldError;
pub use errors::{Field, FormErrors};
pub use form::Form;
pub use producto::ProductoForm;
pub use rules::{
  MIN_NOMBRE_CHARS, parse_categoria_id, parse_precio, validate_categoria_id, validate_nombre,
  validate_precio,
};
