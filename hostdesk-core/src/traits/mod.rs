//! Storage layer abstraction trait definition

mod entity;
mod entity_repository;
mod session_gate;

pub use entity::Entity;
pub use entity_repository::{EntityRepository, InMemoryEntityRepository};
pub use session_gate::{InMemorySessionGate, SessionGate};
