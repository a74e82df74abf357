//! Catalogo API
//!
//! This crate wraps the catalog REST endpoints. Every resource exposes the
//! same five operations through [`EntityService`]:
//! - `get_all` → `GET /{resource}`
//! - `get_by_id` → `GET /{resource}/{id}`
//! - `create` → `POST /{resource}`
//! - `update` → `PUT /{resource}/{id}`
//! - `delete` → `DELETE /{resource}/{id}`
//!
//! [`HttpEntityService`] is the reqwest-backed implementation. Any non-success
//! status, transport failure or undecodable body surfaces as an [`ApiError`];
//! nothing is retried.

mod error;
mod http;
mod response;
mod service;

pub use error::ApiError;
pub use http::{ApiClient, HttpEntityService};
pub use service::EntityService;
