//! In-memory `EntityService` that records every call.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use catalogo_api::{ApiError, EntityService};
use catalogo_model::{
  Categoria, CategoriaPayload, Entity, EntityId, Producto, ProductoPayload,
};

/// Build a stored record from a write payload.
pub trait Fixture: Entity {
  fn from_payload(id: EntityId, payload: &Self::Payload) -> Self;
}

impl Fixture for Categoria {
  fn from_payload(id: EntityId, payload: &CategoriaPayload) -> Self {
    Categoria {
      id,
      nombre: payload.nombre.clone(),
    }
  }
}

impl Fixture for Producto {
  fn from_payload(id: EntityId, payload: &ProductoPayload) -> Self {
    Producto {
      id,
      nombre: payload.nombre.clone(),
      precio: Some(payload.precio),
      categoria_id: Some(payload.categoria_id),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
  GetAll,
  GetById,
  Create,
  Update,
  Delete,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call<P> {
  GetAll,
  GetById(EntityId),
  Create(P),
  Update(EntityId, P),
  Delete(EntityId),
}

struct Inner<E: Entity> {
  records: Vec<E>,
  next_id: EntityId,
  calls: Vec<Call<E::Payload>>,
  failures: HashMap<Op, u16>,
  delay: Option<Duration>,
}

/// Shared handle: clones see the same records and call log.
pub struct FakeService<E: Entity> {
  inner: Arc<Mutex<Inner<E>>>,
}

impl<E: Entity> Clone for FakeService<E> {
  fn clone(&self) -> Self {
    Self {
      inner: self.inner.clone(),
    }
  }
}

impl<E: Fixture> FakeService<E>
where
  E::Payload: Clone,
{
  pub fn with(records: Vec<E>) -> Self {
    let next_id = records.iter().map(|r| r.id()).max().unwrap_or(0) + 1;
    Self {
      inner: Arc::new(Mutex::new(Inner {
        records,
        next_id,
        calls: Vec::new(),
        failures: HashMap::new(),
        delay: None,
      })),
    }
  }

  pub fn empty() -> Self {
    Self::with(Vec::new())
  }

  /// Make every later `op` answer with this HTTP status.
  pub fn fail(&self, op: Op, status: u16) {
    self.inner.lock().unwrap().failures.insert(op, status);
  }

  pub fn heal(&self, op: Op) {
    self.inner.lock().unwrap().failures.remove(&op);
  }

  /// Sleep before answering `get_all`.
  pub fn slow(&self, delay: Duration) {
    self.inner.lock().unwrap().delay = Some(delay);
  }

  pub fn calls(&self) -> Vec<Call<E::Payload>> {
    self.inner.lock().unwrap().calls.clone()
  }

  pub fn count(&self, op: Op) -> usize {
    self
      .calls()
      .iter()
      .filter(|c| {
        matches!(
          (op, c),
          (Op::GetAll, Call::GetAll)
            | (Op::GetById, Call::GetById(_))
            | (Op::Create, Call::Create(_))
            | (Op::Update, Call::Update(..))
            | (Op::Delete, Call::Delete(_))
        )
      })
      .count()
  }

  /// Remove a record behind the manager's back.
  pub fn delete_record(&self, id: EntityId) {
    self.inner.lock().unwrap().records.retain(|r| r.id() != id);
  }

  pub fn records(&self) -> Vec<E> {
    self.inner.lock().unwrap().records.clone()
  }

  fn begin(&self, op: Op, call: Call<E::Payload>) -> Result<(), ApiError> {
    let mut inner = self.inner.lock().unwrap();
    inner.calls.push(call);
    match inner.failures.get(&op) {
      Some(&status) => Err(status_error(status)),
      None => Ok(()),
    }
  }
}

pub fn status_error(status: u16) -> ApiError {
  let status_text = match status {
    404 => "Not Found",
    500 => "Internal Server Error",
    503 => "Service Unavailable",
    _ => "Error",
  };
  ApiError::Status {
    status,
    status_text: status_text.to_string(),
  }
}

#[async_trait]
impl<E: Fixture> EntityService<E> for FakeService<E>
where
  E::Payload: Clone,
{
  async fn get_all(&self) -> Result<Vec<E>, ApiError> {
    let delay = self.inner.lock().unwrap().delay;
    if let Some(delay) = delay {
      tokio::time::sleep(delay).await;
    }
    self.begin(Op::GetAll, Call::GetAll)?;
    Ok(self.records())
  }

  async fn get_by_id(&self, id: EntityId) -> Result<E, ApiError> {
    self.begin(Op::GetById, Call::GetById(id))?;
    self
      .records()
      .into_iter()
      .find(|r| r.id() == id)
      .ok_or_else(|| status_error(404))
  }

  async fn create(&self, payload: &E::Payload) -> Result<E, ApiError> {
    self.begin(Op::Create, Call::Create(payload.clone()))?;
    let mut inner = self.inner.lock().unwrap();
    let id = inner.next_id;
    inner.next_id += 1;
    let record = E::from_payload(id, payload);
    inner.records.push(record.clone());
    Ok(record)
  }

  async fn update(&self, id: EntityId, payload: &E::Payload) -> Result<Option<E>, ApiError> {
    self.begin(Op::Update, Call::Update(id, payload.clone()))?;
    let mut inner = self.inner.lock().unwrap();
    let record = E::from_payload(id, payload);
    match inner.records.iter_mut().find(|r| r.id() == id) {
      Some(slot) => {
        *slot = record.clone();
        Ok(Some(record))
      }
      None => Err(status_error(404)),
    }
  }

  async fn delete(&self, id: EntityId) -> Result<(), ApiError> {
    self.begin(Op::Delete, Call::Delete(id))?;
    self.inner.lock().unwrap().records.retain(|r| r.id() != id);
    Ok(())
  }
}

pub fn categoria(id: EntityId, nombre: &str) -> Categoria {
  Categoria {
    id,
    nombre: nombre.to_string(),
  }
}

pub fn producto(id: EntityId, nombre: &str, precio: f64, categoria_id: Option<EntityId>) -> Producto {
  Producto {
    id,
    nombre: nombre.to_string(),
    precio: Some(precio),
    categoria_id,
  }
}
