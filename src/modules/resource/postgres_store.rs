use async_trait::async_trait;
use chrono::Utc;
use sqlx::{PgPool, Postgres, QueryBuilder};
use std::marker::PhantomData;
use uuid::Uuid;

use super::store::effective_sort;
use super::{Resource, ResourceStore};
use crate::core::error::{AppError, Result};
use crate::shared::pagination::{Filter, Page, PageOptions};

/// Postgres-backed store; one table per resource kind
pub struct PgStore<R> {
    pool: PgPool,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> PgStore<R> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _resource: PhantomData,
        }
    }
}

fn push_filter(query: &mut QueryBuilder<'_, Postgres>, filter: &Filter) {
    query.push(" WHERE 1=1");

    for (field, value) in &filter.conditions {
        query.push(" AND ").push(*field).push(" = ");
        query.push_bind(value.clone());
    }

    if let Some(id) = filter.exclude_id {
        query.push(" AND id <> ");
        query.push_bind(id);
    }
}

fn insert_query<R: Resource>(record: &R) -> QueryBuilder<'static, Postgres> {
    let schema = R::schema();

    let mut query = QueryBuilder::<Postgres>::new("INSERT INTO ");
    query.push(schema.table).push(" (id");
    for field in schema.fields {
        query.push(", ").push(field.name);
    }
    query.push(", created_at, updated_at) VALUES (");

    let mut values = query.separated(", ");
    values.push_bind(record.id());
    for field in schema.fields {
        values.push_bind(record.value(field.name).map(str::to_owned));
    }
    values.push_bind(record.created_at());
    values.push_bind(record.updated_at());
    values.push_unseparated(") RETURNING *");

    query
}

fn select_by_id_query<R: Resource>(id: Uuid) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::<Postgres>::new("SELECT * FROM ");
    query.push(R::schema().table).push(" WHERE id = ");
    query.push_bind(id);
    query
}

fn find_one_query<R: Resource>(filter: &Filter) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::<Postgres>::new("SELECT * FROM ");
    query.push(R::schema().table);
    push_filter(&mut query, filter);
    query.push(" LIMIT 1");
    query
}

fn update_query<R: Resource>(record: &R) -> QueryBuilder<'static, Postgres> {
    let schema = R::schema();

    let mut query = QueryBuilder::<Postgres>::new("UPDATE ");
    query.push(schema.table).push(" SET ");

    let mut assignments = query.separated(", ");
    for field in schema.fields {
        assignments.push(field.name).push_unseparated(" = ");
        assignments.push_bind_unseparated(record.value(field.name).map(str::to_owned));
    }
    assignments.push("updated_at = ");
    assignments.push_bind_unseparated(record.updated_at());

    query.push(" WHERE id = ");
    query.push_bind(record.id());
    query.push(" RETURNING *");
    query
}

fn delete_query<R: Resource>(id: Uuid) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::<Postgres>::new("DELETE FROM ");
    query.push(R::schema().table).push(" WHERE id = ");
    query.push_bind(id);
    query
}

fn count_query<R: Resource>(filter: &Filter) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM ");
    query.push(R::schema().table);
    push_filter(&mut query, filter);
    query
}

/// Text columns sort with `COLLATE "C"` (byte order) so results do not depend
/// on the database locale and match [`super::MemoryStore`].
fn page_query<R: Resource>(
    filter: &Filter,
    options: &PageOptions,
) -> QueryBuilder<'static, Postgres> {
    let schema = R::schema();

    let mut query = QueryBuilder::<Postgres>::new("SELECT * FROM ");
    query.push(schema.table);
    push_filter(&mut query, filter);

    query.push(" ORDER BY ");
    let mut order = query.separated(", ");
    for spec in effective_sort(options) {
        order.push(spec.field);
        if schema.field(spec.field).is_some() {
            order.push_unseparated(" COLLATE \"C\"");
        }
        order.push_unseparated(" ").push_unseparated(spec.direction.as_sql());
    }

    query.push(" LIMIT ");
    query.push_bind(options.limit);
    query.push(" OFFSET ");
    query.push_bind(options.offset());
    query
}

/// Translate write failures; unique violations become validation errors
fn handle_db_error<R: Resource>(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        // PostgreSQL unique_violation
        if db_err.code().as_deref() == Some("23505") {
            let schema = R::schema();
            let constraint = db_err.constraint().unwrap_or_default();
            let field = schema
                .unique_fields()
                .find(|f| constraint.contains(*f))
                .or_else(|| schema.unique_fields().next())
                .unwrap_or("value");
            return AppError::Validation(format!("{} already taken", field));
        }
    }

    tracing::error!("{} store error: {:?}", R::schema().kind, e);
    AppError::Database(e)
}

#[async_trait]
impl<R: Resource> ResourceStore<R> for PgStore<R> {
    async fn create(&self, input: R::Create) -> Result<R> {
        let record = R::from_input(Uuid::now_v7(), Utc::now(), input);

        let mut query = insert_query(&record);
        query
            .build_query_as::<R>()
            .fetch_one(&self.pool)
            .await
            .map_err(handle_db_error::<R>)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<R>> {
        let mut query = select_by_id_query::<R>(id);
        query
            .build_query_as::<R>()
            .fetch_optional(&self.pool)
            .await
            .map_err(handle_db_error::<R>)
    }

    async fn find_one(&self, filter: &Filter) -> Result<Option<R>> {
        let mut query = find_one_query::<R>(filter);
        query
            .build_query_as::<R>()
            .fetch_optional(&self.pool)
            .await
            .map_err(handle_db_error::<R>)
    }

    async fn save(&self, record: &R) -> Result<R> {
        let mut query = update_query(record);
        query
            .build_query_as::<R>()
            .fetch_optional(&self.pool)
            .await
            .map_err(handle_db_error::<R>)?
            .ok_or_else(|| AppError::NotFound(format!("{} not found", R::schema().kind)))
    }

    async fn remove(&self, record: &R) -> Result<()> {
        let mut query = delete_query::<R>(record.id());
        let result = query
            .build()
            .execute(&self.pool)
            .await
            .map_err(handle_db_error::<R>)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("{} not found", R::schema().kind)));
        }

        Ok(())
    }

    async fn paginate(&self, filter: &Filter, options: &PageOptions) -> Result<Page<R>> {
        let mut count = count_query::<R>(filter);
        let total: i64 = count
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(handle_db_error::<R>)?;

        let mut query = page_query::<R>(filter, options);
        let results = query
            .build_query_as::<R>()
            .fetch_all(&self.pool)
            .await
            .map_err(handle_db_error::<R>)?;

        Ok(Page::new(results, total, options))
    }
}
