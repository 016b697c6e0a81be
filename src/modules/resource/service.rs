use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use super::{FieldValues, Resource, ResourceStore};
use crate::core::error::{AppError, Result};
use crate::shared::pagination::{Filter, Page, PageOptions};

/// CRUD operations for one resource kind
pub struct ResourceService<R: Resource> {
    store: Arc<dyn ResourceStore<R>>,
}

impl<R: Resource> ResourceService<R> {
    pub fn new(store: Arc<dyn ResourceStore<R>>) -> Self {
        Self { store }
    }

    fn not_found(id: Uuid) -> AppError {
        AppError::NotFound(format!("{} {} not found", R::schema().kind, id))
    }

    /// Reject any unique field in `values` already held by another record
    async fn ensure_unique(&self, values: &impl FieldValues, exclude_id: Option<Uuid>) -> Result<()> {
        for field in R::schema().unique_fields() {
            if let Some(value) = values.value(field) {
                if self.is_value_taken(field, value.trim(), exclude_id).await? {
                    return Err(AppError::Validation(format!("{} already taken", field)));
                }
            }
        }

        Ok(())
    }

    /// Whether some record other than `exclude_id` holds `value` in `field`
    pub async fn is_value_taken(
        &self,
        field: &'static str,
        value: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<bool> {
        let filter = Filter::new().eq(field, value).exclude(exclude_id);
        Ok(self.store.find_one(&filter).await?.is_some())
    }

    pub async fn create(&self, input: R::Create) -> Result<R> {
        self.ensure_unique(&input, None).await?;

        let record = self.store.create(input).await?;
        tracing::info!("{} created: {}", R::schema().kind, record.id());

        Ok(record)
    }

    pub async fn list(&self, filter: &Filter, options: &PageOptions) -> Result<Page<R>> {
        self.store.paginate(filter, options).await
    }

    pub async fn find_one(&self, filter: &Filter) -> Result<Option<R>> {
        self.store.find_one(filter).await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<R>> {
        self.store.find_by_id(id).await
    }

    /// Merge `patch` into an existing record and refresh `updated_at`
    pub async fn update_by_id(&self, id: Uuid, patch: R::Update) -> Result<R> {
        let mut record = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| Self::not_found(id))?;

        self.ensure_unique(&patch, Some(id)).await?;

        record.apply(patch);
        record.touch(Utc::now());

        let record = self.store.save(&record).await?;
        tracing::info!("{} updated: {}", R::schema().kind, id);

        Ok(record)
    }

    /// Hard delete; returns the removed record
    pub async fn delete_by_id(&self, id: Uuid) -> Result<R> {
        let record = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| Self::not_found(id))?;

        self.store.remove(&record).await?;
        tracing::info!("{} deleted: {}", R::schema().kind, id);

        Ok(record)
    }
}
