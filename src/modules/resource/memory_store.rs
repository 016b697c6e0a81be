use async_trait::async_trait;
use chrono::Utc;
use std::cmp::Ordering;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::store::effective_sort;
use super::{Resource, ResourceStore};
use crate::core::error::{AppError, Result};
use crate::shared::pagination::{Filter, Page, PageOptions, SortDirection, SortSpec};

/// In-process store with the same filter, sort and paging semantics as
/// [`super::PgStore`]. Text fields compare by bytes, which is what the
/// Postgres store's `COLLATE "C"` ordering gives. Contents are lost on restart.
pub struct MemoryStore<R> {
    records: RwLock<Vec<R>>,
}

impl<R: Resource> MemoryStore<R> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl<R: Resource> Default for MemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

fn matches<R: Resource>(record: &R, filter: &Filter) -> bool {
    if filter.exclude_id == Some(record.id()) {
        return false;
    }

    filter
        .conditions
        .iter()
        .all(|(field, value)| record.value(field) == Some(value.as_str()))
}

fn compare_field<R: Resource>(a: &R, b: &R, field: &str) -> Ordering {
    match field {
        "id" => a.id().cmp(&b.id()),
        "created_at" => a.created_at().cmp(&b.created_at()),
        "updated_at" => a.updated_at().cmp(&b.updated_at()),
        // Missing values sort last ascending, like Postgres NULLs
        _ => match (a.value(field), b.value(field)) {
            (Some(x), Some(y)) => x.cmp(y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    }
}

fn compare<R: Resource>(a: &R, b: &R, sort: &[SortSpec]) -> Ordering {
    sort.iter()
        .map(|spec| {
            let ordering = compare_field(a, b, spec.field);
            match spec.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        })
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

fn not_found<R: Resource>() -> AppError {
    AppError::NotFound(format!("{} not found", R::schema().kind))
}

#[async_trait]
impl<R: Resource> ResourceStore<R> for MemoryStore<R> {
    async fn create(&self, input: R::Create) -> Result<R> {
        let record = R::from_input(Uuid::now_v7(), Utc::now(), input);
        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<R>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id() == id).cloned())
    }

    async fn find_one(&self, filter: &Filter) -> Result<Option<R>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| matches(*r, filter)).cloned())
    }

    async fn save(&self, record: &R) -> Result<R> {
        let mut records = self.records.write().await;
        let slot = records
            .iter_mut()
            .find(|r| r.id() == record.id())
            .ok_or_else(not_found::<R>)?;

        *slot = record.clone();
        Ok(record.clone())
    }

    async fn remove(&self, record: &R) -> Result<()> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id() != record.id());

        if records.len() == before {
            return Err(not_found::<R>());
        }

        Ok(())
    }

    async fn paginate(&self, filter: &Filter, options: &PageOptions) -> Result<Page<R>> {
        let records = self.records.read().await;
        let sort = effective_sort(options);

        let mut matched: Vec<&R> = records.iter().filter(|r| matches(*r, filter)).collect();
        matched.sort_by(|a, b| compare(*a, *b, &sort));

        let total = matched.len() as i64;
        let results = matched
            .into_iter()
            .skip(options.offset().max(0) as usize)
            .take(options.limit.max(0) as usize)
            .cloned()
            .collect();

        Ok(Page::new(results, total, options))
    }
}
