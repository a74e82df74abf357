//! Reqwest-backed implementation of [`EntityService`].

use std::marker::PhantomData;
use std::time::Duration;

use async_trait::async_trait;
use catalogo_config::ApiConfig;
use catalogo_model::{Categoria, Entity, EntityId, Producto, ProductoDetalle, ProductoLookup};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::Serialize;
use serde::de::{DeserializeOwned, IgnoredAny};
use tracing::{debug, warn};
use url::Url;

use crate::error::ApiError;
use crate::response::interpret;
use crate::service::EntityService;

const JSON: &str = "application/json";

/// Shared HTTP transport for every resource of one API.
///
/// Cloning is cheap: the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ApiClient {
  client: Client,
  base_url: Url,
}

impl ApiClient {
  /// Build a client from configuration.
  pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
    let base_url = config.resolved_base_url()?;

    let mut builder = Client::builder().user_agent(config.user_agent.clone());
    if let Some(timeout_ms) = config.timeout_ms {
      builder = builder.timeout(Duration::from_millis(timeout_ms));
    }

    Ok(Self {
      client: builder.build()?,
      base_url,
    })
  }

  /// Service for the `categorias` resource.
  pub fn categorias(&self) -> HttpEntityService<Categoria> {
    HttpEntityService::new(self.clone())
  }

  /// Service for the `productos` resource.
  pub fn productos(&self) -> HttpEntityService<Producto> {
    HttpEntityService::new(self.clone())
  }

  /// Issue one request and interpret the response.
  ///
  /// Every request declares a JSON content type; a body is only attached on
  /// write paths.
  async fn request<T, B>(
    &self,
    method: Method,
    path: &str,
    body: Option<&B>,
  ) -> Result<Option<T>, ApiError>
  where
    T: DeserializeOwned,
    B: Serialize + ?Sized,
  {
    let url = self.base_url.join(path)?;
    debug!(method = %method, url = %url, "api_request");

    let mut request = self
      .client
      .request(method.clone(), url)
      .header(CONTENT_TYPE, JSON)
      .header(ACCEPT, JSON);

    if let Some(body) = body {
      request = request.json(body);
    }

    let response = request.send().await.map_err(|e| {
      warn!(method = %method, path = %path, error = %e, "api_request_failed");
      ApiError::Transport(e)
    })?;

    let status = response.status();
    let bytes = response.bytes().await?;

    let result = interpret(status, &bytes);
    if let Err(e) = &result {
      warn!(method = %method, path = %path, status = status.as_u16(), error = %e, "api_request_failed");
    }
    result
  }
}

/// [`EntityService`] for one resource, talking HTTP through an [`ApiClient`].
#[derive(Debug, Clone)]
pub struct HttpEntityService<E> {
  api: ApiClient,
  _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> HttpEntityService<E> {
  pub fn new(api: ApiClient) -> Self {
    Self {
      api,
      _entity: PhantomData,
    }
  }

  fn collection_path() -> String {
    E::RESOURCE.to_string()
  }

  fn record_path(id: EntityId) -> String {
    format!("{}/{}", E::RESOURCE, id)
  }
}

impl HttpEntityService<Producto> {
  /// Fetch a product together with the category the product service resolved
  /// for it. Servers that answer with a bare product yield no category.
  pub async fn get_detalle(&self, id: EntityId) -> Result<ProductoDetalle, ApiError> {
    let path = Self::record_path(id);
    let lookup: Option<ProductoLookup> = self.api.request::<_, ()>(Method::GET, &path, None).await?;
    let lookup = lookup.ok_or(ApiError::MissingBody { path })?;
    Ok(lookup.into_detalle())
  }
}

#[async_trait]
impl<E: Entity> EntityService<E> for HttpEntityService<E> {
  /// No content and a literal `null` body both read as an empty list.
  async fn get_all(&self) -> Result<Vec<E>, ApiError> {
    let records: Option<Option<Vec<E>>> = self
      .api
      .request::<_, ()>(Method::GET, &Self::collection_path(), None)
      .await?;
    Ok(records.flatten().unwrap_or_default())
  }

  async fn get_by_id(&self, id: EntityId) -> Result<E, ApiError> {
    let path = Self::record_path(id);
    let lookup: Option<E::Lookup> = self.api.request::<_, ()>(Method::GET, &path, None).await?;
    let lookup = lookup.ok_or(ApiError::MissingBody { path })?;
    Ok(lookup.into())
  }

  async fn create(&self, payload: &E::Payload) -> Result<E, ApiError> {
    let path = Self::collection_path();
    let created: Option<E> = self.api.request(Method::POST, &path, Some(payload)).await?;
    created.ok_or(ApiError::MissingBody { path })
  }

  async fn update(&self, id: EntityId, payload: &E::Payload) -> Result<Option<E>, ApiError> {
    self
      .api
      .request(Method::PUT, &Self::record_path(id), Some(payload))
      .await
  }

  async fn delete(&self, id: EntityId) -> Result<(), ApiError> {
    self
      .api
      .request::<IgnoredAny, ()>(Method::DELETE, &Self::record_path(id), None)
      .await?;
    Ok(())
  }
}
