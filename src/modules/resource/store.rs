use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use super::{MemoryStore, PgStore, Resource};
use crate::core::error::Result;
use crate::shared::pagination::{Filter, Page, PageOptions, SortDirection, SortSpec};

/// Persistence for one resource kind.
///
/// Services only talk to this trait, so the same business rules run against
/// Postgres in production and against memory in tests. Identity (UUID v7) and
/// timestamps are assigned by the store on create.
#[async_trait]
pub trait ResourceStore<R: Resource>: Send + Sync {
    async fn create(&self, input: R::Create) -> Result<R>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<R>>;

    /// First record matching every condition of `filter`
    async fn find_one(&self, filter: &Filter) -> Result<Option<R>>;

    /// Persist an already-merged record. NotFound if it no longer exists.
    async fn save(&self, record: &R) -> Result<R>;

    /// Hard delete. NotFound if it no longer exists.
    async fn remove(&self, record: &R) -> Result<()>;

    async fn paginate(&self, filter: &Filter, options: &PageOptions) -> Result<Page<R>>;
}

/// Backing store selected at startup
#[derive(Clone)]
pub enum Storage {
    Postgres(PgPool),
    Memory,
}

impl Storage {
    /// Store for one resource kind. Memory stores are fresh on every call.
    pub fn store<R: Resource>(&self) -> Arc<dyn ResourceStore<R>> {
        match self {
            Storage::Postgres(pool) => Arc::new(PgStore::<R>::new(pool.clone())),
            Storage::Memory => Arc::new(MemoryStore::<R>::new()),
        }
    }
}

/// Requested sort plus the stable fallbacks: `created_at` when nothing was
/// requested, and `id` as the final tie-breaker.
pub(super) fn effective_sort(options: &PageOptions) -> Vec<SortSpec> {
    let mut sort = if options.sort.is_empty() {
        vec![SortSpec {
            field: "created_at",
            direction: SortDirection::Asc,
        }]
    } else {
        options.sort.clone()
    };

    if !sort.iter().any(|s| s.field == "id") {
        sort.push(SortSpec {
            field: "id",
            direction: SortDirection::Asc,
        });
    }

    sort
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sort_is_created_at_then_id() {
        let sort = effective_sort(&PageOptions::default());
        let fields: Vec<_> = sort.iter().map(|s| s.field).collect();
        assert_eq!(fields, vec!["created_at", "id"]);
    }

    #[test]
    fn test_id_tiebreaker_appended_once() {
        let options = PageOptions {
            sort: vec![SortSpec {
                field: "id",
                direction: SortDirection::Desc,
            }],
            ..PageOptions::default()
        };
        assert_eq!(effective_sort(&options), options.sort);
    }
}
