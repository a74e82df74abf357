use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned identity of a record.
pub type EntityId = i64;

/// A record type served by one REST resource.
///
/// The API client is generic over this trait, so adding a resource only
/// requires a new implementation here.
pub trait Entity: DeserializeOwned + Clone + Send + Sync + 'static {
  /// Body sent on create and update.
  type Payload: Serialize + Send + Sync;

  /// Body returned by `GET /{resource}/{id}`.
  type Lookup: DeserializeOwned + Into<Self> + Send;

  /// Path segment of the resource (e.g. `categorias`).
  const RESOURCE: &'static str;

  fn id(&self) -> EntityId;
}

/// Read an explicit `null` as the type's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Default + Deserialize<'de>,
{
  Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
