//! `SeaORM` entities, one per table.

pub mod customer;
pub mod domain;
pub mod hosting_package;
pub mod vps;
