//! `SeaORM` entity for the `domains` table.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "domains")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub domain_name: String,
    pub registrar: String,
    pub purchase_date: String,
    pub expiry_date: String,
    /// JSON array of nameserver hostnames
    pub nameservers: String,
    pub a_record: Option<String>,
    pub hosting_id: Option<String>,
    pub customer_id: String,
    pub status: String,
    pub is_auto_renew: i32,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
