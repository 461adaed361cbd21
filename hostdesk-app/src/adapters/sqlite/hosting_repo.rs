//! `EntityRepository<HostingPackage>` implementation for `SqliteStore`.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait, QueryOrder};

use hostdesk_core::error::{CoreError, CoreResult};
use hostdesk_core::traits::{Entity, EntityRepository};
use hostdesk_core::types::{EntityKind, HostingPackage, HostingRecord};

use super::entity::hosting_package;
use super::{SqliteStore, created_at_now, db_error};

impl hosting_package::Model {
    fn into_record(self) -> HostingRecord {
        HostingRecord {
            id: self.id,
            name: self.name,
            kind: self.kind,
            vps_id: self.vps_id,
            control_panel: self.control_panel,
            customer_id: self.customer_id,
            primary_domain: self.primary_domain,
            ip_address: self.ip_address,
            expiry_date: self.expiry_date,
        }
    }
}

fn record_to_active_model(record: HostingRecord) -> hosting_package::ActiveModel {
    hosting_package::ActiveModel {
        id: Set(record.id),
        name: Set(record.name),
        kind: Set(record.kind),
        vps_id: Set(record.vps_id),
        control_panel: Set(record.control_panel),
        customer_id: Set(record.customer_id),
        primary_domain: Set(record.primary_domain),
        ip_address: Set(record.ip_address),
        expiry_date: Set(record.expiry_date),
        ..Default::default()
    }
}

#[async_trait]
impl EntityRepository<HostingPackage> for SqliteStore {
    async fn find_all(&self) -> CoreResult<Vec<HostingPackage>> {
        let rows = hosting_package::Entity::find()
            .order_by_asc(hosting_package::Column::CreatedAt)
            .order_by_asc(hosting_package::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| db_error("query hosting packages", &e))?;

        rows.into_iter()
            .map(|row| HostingPackage::from_record(row.into_record()))
            .collect()
    }

    async fn create(
        &self,
        request: &<HostingPackage as Entity>::Request,
    ) -> CoreResult<HostingPackage> {
        let id = uuid::Uuid::new_v4().to_string();
        let hosting = HostingPackage::from_request(id, request.clone());

        let record = hosting.to_record();
        let mut active = record_to_active_model(record.clone());
        active.created_at = Set(created_at_now());
        hosting_package::Entity::insert(active)
            .exec(&self.db)
            .await
            .map_err(|e| db_error("insert hosting package", &e))?;

        HostingPackage::from_record(record)
    }

    async fn update(&self, hosting: &HostingPackage) -> CoreResult<HostingPackage> {
        let existing = hosting_package::Entity::find_by_id(hosting.id.as_str())
            .one(&self.db)
            .await
            .map_err(|e| db_error("query hosting package", &e))?;
        if existing.is_none() {
            return Err(CoreError::not_found(EntityKind::Hosting, &hosting.id));
        }

        let updated = record_to_active_model(hosting.to_record())
            .update(&self.db)
            .await
            .map_err(|e| db_error("update hosting package", &e))?;

        HostingPackage::from_record(updated.into_record())
    }

    async fn delete(&self, id: &str) -> CoreResult<()> {
        let result = hosting_package::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| db_error("delete hosting package", &e))?;

        if result.rows_affected == 0 {
            return Err(CoreError::not_found(EntityKind::Hosting, id));
        }
        Ok(())
    }
}
