//! `EntityRepository<Customer>` implementation for `SqliteStore`.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait, QueryOrder};

use hostdesk_core::error::{CoreError, CoreResult};
use hostdesk_core::traits::{Entity, EntityRepository};
use hostdesk_core::types::{Customer, CustomerRecord, EntityKind};

use super::entity::customer;
use super::{SqliteStore, created_at_now, db_error};

impl customer::Model {
    fn into_record(self) -> CustomerRecord {
        CustomerRecord {
            id: self.id,
            name: self.name,
            company: self.company,
            email: self.email,
            phone: self.phone,
            notes: self.notes,
            status: self.status,
        }
    }
}

/// Every column except `created_at`, which is only written on insert.
fn record_to_active_model(record: CustomerRecord) -> customer::ActiveModel {
    customer::ActiveModel {
        id: Set(record.id),
        name: Set(record.name),
        company: Set(record.company),
        email: Set(record.email),
        phone: Set(record.phone),
        notes: Set(record.notes),
        status: Set(record.status),
        ..Default::default()
    }
}

#[async_trait]
impl EntityRepository<Customer> for SqliteStore {
    async fn find_all(&self) -> CoreResult<Vec<Customer>> {
        let rows = customer::Entity::find()
            .order_by_asc(customer::Column::CreatedAt)
            .order_by_asc(customer::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| db_error("query customers", &e))?;

        rows.into_iter()
            .map(|row| Customer::from_record(row.into_record()))
            .collect()
    }

    async fn create(&self, request: &<Customer as Entity>::Request) -> CoreResult<Customer> {
        let id = uuid::Uuid::new_v4().to_string();
        let customer = Customer::from_request(id, request.clone());

        let mut active = record_to_active_model(customer.to_record());
        active.created_at = Set(created_at_now());
        customer::Entity::insert(active)
            .exec(&self.db)
            .await
            .map_err(|e| db_error("insert customer", &e))?;

        Ok(customer)
    }

    async fn update(&self, customer: &Customer) -> CoreResult<Customer> {
        let existing = customer::Entity::find_by_id(customer.id.as_str())
            .one(&self.db)
            .await
            .map_err(|e| db_error("query customer", &e))?;
        if existing.is_none() {
            return Err(CoreError::not_found(EntityKind::Customer, &customer.id));
        }

        let updated = record_to_active_model(customer.to_record())
            .update(&self.db)
            .await
            .map_err(|e| db_error("update customer", &e))?;

        Customer::from_record(updated.into_record())
    }

    async fn delete(&self, id: &str) -> CoreResult<()> {
        let result = customer::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| db_error("delete customer", &e))?;

        if result.rows_affected == 0 {
            return Err(CoreError::not_found(EntityKind::Customer, id));
        }
        Ok(())
    }
}
