//! `EntityRepository<Domain>` implementation for `SqliteStore`.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait, QueryOrder};

use hostdesk_core::error::{CoreError, CoreResult};
use hostdesk_core::traits::{Entity, EntityRepository};
use hostdesk_core::types::{Domain, DomainRecord, EntityKind};

use super::entity::domain;
use super::{SqliteStore, created_at_now, db_error};

impl domain::Model {
    /// Convert a `SeaORM` row model into a storage record.
    ///
    /// The nameserver column holds a JSON array.
    fn into_record(self) -> CoreResult<DomainRecord> {
        let nameservers: Vec<String> = serde_json::from_str(&self.nameservers).map_err(|e| {
            CoreError::SerializationError(format!("Invalid nameservers JSON: {e}"))
        })?;

        Ok(DomainRecord {
            id: self.id,
            domain_name: self.domain_name,
            registrar: self.registrar,
            purchase_date: self.purchase_date,
            expiry_date: self.expiry_date,
            nameservers,
            a_record: self.a_record,
            hosting_id: self.hosting_id,
            customer_id: self.customer_id,
            status: self.status,
            is_auto_renew: self.is_auto_renew != 0,
        })
    }
}

/// Every column except `created_at`, which is only written on insert.
fn record_to_active_model(record: DomainRecord) -> CoreResult<domain::ActiveModel> {
    let nameservers = serde_json::to_string(&record.nameservers)
        .map_err(|e| CoreError::SerializationError(e.to_string()))?;

    Ok(domain::ActiveModel {
        id: Set(record.id),
        domain_name: Set(record.domain_name),
        registrar: Set(record.registrar),
        purchase_date: Set(record.purchase_date),
        expiry_date: Set(record.expiry_date),
        nameservers: Set(nameservers),
        a_record: Set(record.a_record),
        hosting_id: Set(record.hosting_id),
        customer_id: Set(record.customer_id),
        status: Set(record.status),
        is_auto_renew: Set(i32::from(record.is_auto_renew)),
        ..Default::default()
    })
}

#[async_trait]
impl EntityRepository<Domain> for SqliteStore {
    async fn find_all(&self) -> CoreResult<Vec<Domain>> {
        let rows = domain::Entity::find()
            .order_by_asc(domain::Column::CreatedAt)
            .order_by_asc(domain::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| db_error("query domains", &e))?;

        rows.into_iter()
            .map(|row| Domain::from_record(row.into_record()?))
            .collect()
    }

    async fn create(&self, request: &<Domain as Entity>::Request) -> CoreResult<Domain> {
        let id = uuid::Uuid::new_v4().to_string();
        let domain = Domain::from_request(id, request.clone());

        let record = domain.to_record();
        let mut active = record_to_active_model(record.clone())?;
        active.created_at = Set(created_at_now());
        domain::Entity::insert(active)
            .exec(&self.db)
            .await
            .map_err(|e| db_error("insert domain", &e))?;

        Domain::from_record(record)
    }

    async fn update(&self, domain: &Domain) -> CoreResult<Domain> {
        let existing = domain::Entity::find_by_id(domain.id.as_str())
            .one(&self.db)
            .await
            .map_err(|e| db_error("query domain", &e))?;
        if existing.is_none() {
            return Err(CoreError::not_found(EntityKind::Domain, &domain.id));
        }

        let updated = record_to_active_model(domain.to_record())?
            .update(&self.db)
            .await
            .map_err(|e| db_error("update domain", &e))?;

        Domain::from_record(updated.into_record()?)
    }

    async fn delete(&self, id: &str) -> CoreResult<()> {
        let result = domain::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| db_error("delete domain", &e))?;

        if result.rows_affected == 0 {
            return Err(CoreError::not_found(EntityKind::Domain, id));
        }
        Ok(())
    }
}
