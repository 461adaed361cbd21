//! `SeaORM` entity for the `vps` table.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vps")]
/// Database row model for a server; specs are flattened into `cpu`/`ram`/`disk`.
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub provider: String,
    pub ip_address: String,
    pub os: String,
    pub cpu: String,
    pub ram: String,
    pub disk: String,
    pub expiry_date: String,
    pub status: String,
    pub customer_id: Option<String>,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
