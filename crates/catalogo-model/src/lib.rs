//! Catalogo Model
//!
//! This crate contains the record types exchanged with the catalog REST API.
//! Two resources exist:
//! - `categorias`: [`Categoria`] records, written with [`CategoriaPayload`]
//! - `productos`: [`Producto`] records, written with [`ProductoPayload`]
//!
//! A product points at its category through a plain integer id. The reference
//! is soft: nothing guarantees the category exists, so consumers resolve it
//! against whatever categories they have loaded.

mod categoria;
mod entity;
mod producto;

pub use categoria::{Categoria, CategoriaPayload};
pub use entity::{Entity, EntityId};
pub use producto::{Producto, ProductoDetalle, ProductoLookup, ProductoPayload};
