//! Generic CRUD machinery shared by every reference-data resource.
//!
//! Each resource kind describes itself with a static [`ResourceSchema`] and
//! implements [`Resource`]. Persistence goes through [`ResourceStore`], backed
//! either by Postgres ([`PgStore`]) or by process memory ([`MemoryStore`]).
//! [`ResourceService`] layers the business rules (uniqueness, existence checks,
//! partial updates) on top of whichever store is configured.

mod memory_store;
mod postgres_store;
mod schema;
mod service;
mod store;

pub mod handlers;

pub use memory_store::MemoryStore;
pub use postgres_store::PgStore;
pub use schema::{trimmed, trimmed_opt, FieldSpec, FieldValues, ListQuery, Resource, ResourceSchema};
pub use service::ResourceService;
pub use store::{ResourceStore, Storage};
