use async_trait::async_trait;
use catalogo_model::{Entity, EntityId};

use crate::error::ApiError;

/// CRUD operations on one REST resource.
///
/// Managers only depend on this trait, so tests can drive them with
/// in-memory implementations.
#[async_trait]
pub trait EntityService<E: Entity>: Send + Sync {
  /// List every record. A "no content" answer is an empty list.
  async fn get_all(&self) -> Result<Vec<E>, ApiError>;

  /// Fetch a single record.
  async fn get_by_id(&self, id: EntityId) -> Result<E, ApiError>;

  /// Create a record and return it with its server-assigned id.
  async fn create(&self, payload: &E::Payload) -> Result<E, ApiError>;

  /// Replace a record. Servers may answer without a body.
  async fn update(&self, id: EntityId, payload: &E::Payload) -> Result<Option<E>, ApiError>;

  /// Delete a record.
  async fn delete(&self, id: EntityId) -> Result<(), ApiError>;
}
