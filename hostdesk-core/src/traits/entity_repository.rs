//! Persistence collaborator abstraction

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::entity::Entity;
use crate::error::{CoreError, CoreResult};

/// Entity Repository Trait
///
/// One implementation per entity kind. Identifiers are always assigned here,
/// never by the services.
///
/// Platform implementation:
/// - `SqliteStore` (`SeaORM`, hostdesk-app `sqlite-store` feature)
/// - `InMemoryEntityRepository` (default, all platforms)
#[async_trait]
pub trait EntityRepository<E: Entity>: Send + Sync {
    /// Get all entities (order is not meaningful)
    async fn find_all(&self) -> CoreResult<Vec<E>>;

    /// Persist a new entity and return it with its server-assigned ID
    ///
    /// # Arguments
    /// * `request` - Entity data without ID
    async fn create(&self, request: &E::Request) -> CoreResult<E>;

    /// Replace an existing entity
    ///
    /// Fails with `NotFound` if the ID does not exist.
    async fn update(&self, entity: &E) -> CoreResult<E>;

    /// Delete by ID
    ///
    /// Fails with `NotFound` if the ID does not exist.
    async fn delete(&self, id: &str) -> CoreResult<()>;
}

/// In-memory entity repository
///
/// Keeps storage records in insertion order and assigns UUID v4 identifiers.
pub struct InMemoryEntityRepository<E: Entity> {
    rows: Arc<RwLock<Vec<(String, E::Record)>>>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> InMemoryEntityRepository<E> {
    /// Create an empty repository
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: Arc::new(RwLock::new(Vec::new())),
            _entity: PhantomData,
        }
    }

    /// Create a repository pre-filled with existing entities (IDs are kept)
    #[must_use]
    pub fn seeded(entities: &[E]) -> Self {
        let rows = entities
            .iter()
            .map(|e| (e.id().to_string(), e.to_record()))
            .collect();
        Self {
            rows: Arc::new(RwLock::new(rows)),
            _entity: PhantomData,
        }
    }
}

impl<E: Entity> Default for InMemoryEntityRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> Clone for InMemoryEntityRepository<E> {
    fn clone(&self) -> Self {
        Self {
            rows: Arc::clone(&self.rows),
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E: Entity> EntityRepository<E> for InMemoryEntityRepository<E> {
    async fn find_all(&self) -> CoreResult<Vec<E>> {
        self.rows
            .read()
            .await
            .iter()
            .map(|(_, record)| E::from_record(record.clone()))
            .collect()
    }

    async fn create(&self, request: &E::Request) -> CoreResult<E> {
        let id = uuid::Uuid::new_v4().to_string();
        let record = E::from_request(id.clone(), request.clone()).to_record();
        self.rows.write().await.push((id, record.clone()));
        E::from_record(record)
    }

    async fn update(&self, entity: &E) -> CoreResult<E> {
        let mut rows = self.rows.write().await;
        let row = rows
            .iter_mut()
            .find(|(id, _)| id == entity.id())
            .ok_or_else(|| CoreError::not_found(E::KIND, entity.id()))?;
        row.1 = entity.to_record();
        E::from_record(row.1.clone())
    }

    async fn delete(&self, id: &str) -> CoreResult<()> {
        let mut rows = self.rows.write().await;
        let index = rows
            .iter()
            .position(|(row_id, _)| row_id == id)
            .ok_or_else(|| CoreError::not_found(E::KIND, id))?;
        rows.remove(index);
        Ok(())
    }
}
