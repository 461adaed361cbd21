//! `EntityRepository<Vps>` implementation for `SqliteStore`.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait, QueryOrder};

use hostdesk_core::error::{CoreError, CoreResult};
use hostdesk_core::traits::{Entity, EntityRepository};
use hostdesk_core::types::{EntityKind, Vps, VpsRecord};

use super::entity::vps;
use super::{SqliteStore, created_at_now, db_error};

impl vps::Model {
    fn into_record(self) -> VpsRecord {
        VpsRecord {
            id: self.id,
            name: self.name,
            provider: self.provider,
            ip_address: self.ip_address,
            os: self.os,
            cpu: self.cpu,
            ram: self.ram,
            disk: self.disk,
            expiry_date: self.expiry_date,
            status: self.status,
            customer_id: self.customer_id,
        }
    }
}

fn record_to_active_model(record: VpsRecord) -> vps::ActiveModel {
    vps::ActiveModel {
        id: Set(record.id),
        name: Set(record.name),
        provider: Set(record.provider),
        ip_address: Set(record.ip_address),
        os: Set(record.os),
        cpu: Set(record.cpu),
        ram: Set(record.ram),
        disk: Set(record.disk),
        expiry_date: Set(record.expiry_date),
        status: Set(record.status),
        customer_id: Set(record.customer_id),
        ..Default::default()
    }
}

#[async_trait]
impl EntityRepository<Vps> for SqliteStore {
    async fn find_all(&self) -> CoreResult<Vec<Vps>> {
        let rows = vps::Entity::find()
            .order_by_asc(vps::Column::CreatedAt)
            .order_by_asc(vps::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| db_error("query servers", &e))?;

        rows.into_iter()
            .map(|row| Vps::from_record(row.into_record()))
            .collect()
    }

    async fn create(&self, request: &<Vps as Entity>::Request) -> CoreResult<Vps> {
        let id = uuid::Uuid::new_v4().to_string();
        let server = Vps::from_request(id, request.clone());

        let record = server.to_record();
        let mut active = record_to_active_model(record.clone());
        active.created_at = Set(created_at_now());
        vps::Entity::insert(active)
            .exec(&self.db)
            .await
            .map_err(|e| db_error("insert server", &e))?;

        Vps::from_record(record)
    }

    async fn update(&self, server: &Vps) -> CoreResult<Vps> {
        let existing = vps::Entity::find_by_id(server.id.as_str())
            .one(&self.db)
            .await
            .map_err(|e| db_error("query server", &e))?;
        if existing.is_none() {
            return Err(CoreError::not_found(EntityKind::Vps, &server.id));
        }

        let updated = record_to_active_model(server.to_record())
            .update(&self.db)
            .await
            .map_err(|e| db_error("update server", &e))?;

        Vps::from_record(updated.into_record())
    }

    async fn delete(&self, id: &str) -> CoreResult<()> {
        let result = vps::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| db_error("delete server", &e))?;

        if result.rows_affected == 0 {
            return Err(CoreError::not_found(EntityKind::Vps, id));
        }
        Ok(())
    }
}
