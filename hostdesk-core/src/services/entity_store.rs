//! Entity Store
//!
//! Authoritative in-memory copy of the four collections. Every mutation
//! round-trips through the repository first; the local copy only ever changes
//! from a successful persistence result.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::traits::{Entity, EntityRepository};
use crate::types::{Customer, Domain, EntityKind, HostingPackage, Vps};

/// A consistent copy of all four collections
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collections {
    pub customers: Vec<Customer>,
    pub domains: Vec<Domain>,
    pub hostings: Vec<HostingPackage>,
    pub vps: Vec<Vps>,
}

/// Entities the store knows how to hold
///
/// Maps each entity type to its collection and its repository.
pub trait Stored: Entity {
    fn collection(collections: &Collections) -> &Vec<Self>;

    fn collection_mut(collections: &mut Collections) -> &mut Vec<Self>;

    fn repository(ctx: &ServiceContext) -> &Arc<dyn EntityRepository<Self>>;
}

impl Stored for Customer {
    fn collection(collections: &Collections) -> &Vec<Self> {
        &collections.customers
    }

    fn collection_mut(collections: &mut Collections) -> &mut Vec<Self> {
        &mut collections.customers
    }

    fn repository(ctx: &ServiceContext) -> &Arc<dyn EntityRepository<Self>> {
        ctx.customer_repository()
    }
}

impl Stored for Domain {
    fn collection(collections: &Collections) -> &Vec<Self> {
        &collections.domains
    }

    fn collection_mut(collections: &mut Collections) -> &mut Vec<Self> {
        &mut collections.domains
    }

    fn repository(ctx: &ServiceContext) -> &Arc<dyn EntityRepository<Self>> {
        ctx.domain_repository()
    }
}

impl Stored for HostingPackage {
    fn collection(collections: &Collections) -> &Vec<Self> {
        &collections.hostings
    }

    fn collection_mut(collections: &mut Collections) -> &mut Vec<Self> {
        &mut collections.hostings
    }

    fn repository(ctx: &ServiceContext) -> &Arc<dyn EntityRepository<Self>> {
        ctx.hosting_repository()
    }
}

impl Stored for Vps {
    fn collection(collections: &Collections) -> &Vec<Self> {
        &collections.vps
    }

    fn collection_mut(collections: &mut Collections) -> &mut Vec<Self> {
        &mut collections.vps
    }

    fn repository(ctx: &ServiceContext) -> &Arc<dyn EntityRepository<Self>> {
        ctx.vps_repository()
    }
}

/// Entity Store
pub struct EntityStore {
    ctx: Arc<ServiceContext>,
    collections: RwLock<Collections>,
}

impl EntityStore {
    /// Create an empty store; call [`EntityStore::load_all`] to populate it.
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self {
            ctx,
            collections: RwLock::new(Collections::default()),
        }
    }

    pub fn ctx(&self) -> &Arc<ServiceContext> {
        &self.ctx
    }

    /// Fetch all four collections concurrently and replace the local copy.
    ///
    /// If any fetch fails nothing is replaced.
    pub async fn load_all(&self) -> CoreResult<()> {
        let (customers, domains, hostings, vps) = futures::try_join!(
            self.ctx.customer_repository().find_all(),
            self.ctx.domain_repository().find_all(),
            self.ctx.hosting_repository().find_all(),
            self.ctx.vps_repository().find_all(),
        )
        .inspect_err(|e| log::error!("Failed to load initial data: {e}"))?;

        log::info!(
            "Loaded {} customers, {} domains, {} hosting packages, {} servers",
            customers.len(),
            domains.len(),
            hostings.len(),
            vps.len()
        );

        *self.collections.write().await = Collections {
            customers,
            domains,
            hostings,
            vps,
        };
        Ok(())
    }

    /// Clone of the current state
    pub async fn snapshot(&self) -> Collections {
        self.collections.read().await.clone()
    }

    /// All entities of one kind
    pub async fn list<E: Stored>(&self) -> Vec<E> {
        E::collection(&*self.collections.read().await).clone()
    }

    /// One entity by ID
    pub async fn get<E: Stored>(&self, id: &str) -> Option<E> {
        E::collection(&*self.collections.read().await)
            .iter()
            .find(|e| e.id() == id)
            .cloned()
    }

    /// Persist a new entity, then append the stored result.
    pub async fn create<E: Stored>(&self, request: E::Request) -> CoreResult<E> {
        E::validate_request(&request)?;

        let created = E::repository(&self.ctx)
            .create(&request)
            .await
            .inspect_err(|e| log_failure("create", E::KIND, "-", e))?;

        E::collection_mut(&mut *self.collections.write().await).push(created.clone());
        log::info!("{} created: {}", E::KIND, created.id());
        Ok(created)
    }

    /// Persist an update, then replace the local copy in place.
    pub async fn update<E: Stored>(&self, entity: E) -> CoreResult<E> {
        E::validate_request(&entity.to_request())?;

        let updated = E::repository(&self.ctx)
            .update(&entity)
            .await
            .inspect_err(|e| log_failure("update", E::KIND, entity.id(), e))?;

        let mut collections = self.collections.write().await;
        let items = E::collection_mut(&mut collections);
        match items.iter_mut().find(|e| e.id() == updated.id()) {
            Some(slot) => *slot = updated.clone(),
            None => {
                log::warn!(
                    "{} {} was updated in storage but missing locally, appending",
                    E::KIND,
                    updated.id()
                );
                items.push(updated.clone());
            }
        }
        Ok(updated)
    }

    /// Persist a deletion, then drop the local copy.
    pub async fn delete<E: Stored>(&self, id: &str) -> CoreResult<()> {
        E::repository(&self.ctx)
            .delete(id)
            .await
            .inspect_err(|e| log_failure("delete", E::KIND, id, e))?;

        E::collection_mut(&mut *self.collections.write().await).retain(|e| e.id() != id);
        log::info!("{} deleted: {id}", E::KIND);
        Ok(())
    }
}

fn log_failure(action: &str, kind: EntityKind, id: &str, err: &CoreError) {
    if err.is_expected() {
        log::warn!("Failed to {action} {kind} {id}: {err}");
    } else {
        log::error!("Failed to {action} {kind} {id}: {err}");
    }
}
