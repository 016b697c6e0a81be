//! Request handling shared by every resource's endpoints.
//!
//! Feature modules wrap these in thin, documented handlers (see
//! [`crate::resource_handlers`]) so each route gets its own OpenAPI operation.

use axum::{http::StatusCode, Json};
use uuid::Uuid;
use validator::Validate;

use super::{FieldValues, ListQuery, Resource, ResourceService};
use crate::core::error::{AppError, Result};
use crate::shared::pagination::Page;
use crate::shared::types::{ApiResponse, Meta};

pub async fn list<R, Q>(
    service: &ResourceService<R>,
    query: Q,
) -> Result<Json<ApiResponse<Page<R>>>>
where
    R: Resource,
    Q: FieldValues + ListQuery,
{
    let schema = R::schema();
    let options = schema.page_options(&query)?;
    let filter = schema.filter_from(&query);

    let page = service.list(&filter, &options).await?;
    let total = page.total_results;

    Ok(Json(ApiResponse::success(
        Some(page),
        None,
        Some(Meta { total }),
    )))
}

pub async fn create<R: Resource>(
    service: &ResourceService<R>,
    dto: R::Create,
) -> Result<(StatusCode, Json<ApiResponse<R>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    R::schema().check_create(&dto)?;

    let record = service.create(dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(record), None, None)),
    ))
}

pub async fn get<R: Resource>(
    service: &ResourceService<R>,
    id: Uuid,
) -> Result<Json<ApiResponse<R>>> {
    let record = service.get_by_id(id).await?.ok_or_else(|| {
        AppError::NotFound(format!("{} {} not found", R::schema().kind, id))
    })?;

    Ok(Json(ApiResponse::success(Some(record), None, None)))
}

pub async fn update<R: Resource>(
    service: &ResourceService<R>,
    id: Uuid,
    dto: R::Update,
) -> Result<Json<ApiResponse<R>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    R::schema().check_update(&dto)?;

    let record = service.update_by_id(id, dto).await?;

    Ok(Json(ApiResponse::success(Some(record), None, None)))
}

pub async fn delete<R: Resource>(service: &ResourceService<R>, id: Uuid) -> Result<StatusCode> {
    service.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Generate the five documented CRUD handlers for one resource.
///
/// Handlers take `State<Arc<ResourceService<$model>>>`; the caller supplies
/// the route paths, OpenAPI tag and operation ids.
#[macro_export]
macro_rules! resource_handlers {
    (
        model: $model:ident,
        create_dto: $create:ident,
        update_dto: $update:ident,
        query: $query:ident,
        tag: $tag:tt,
        collection: $collection:tt,
        item: $item:tt,
        list: $list_fn:ident => $list_op:tt,
        create: $create_fn:ident => $create_op:tt,
        get: $get_fn:ident => $get_op:tt,
        update: $update_fn:ident => $update_op:tt,
        delete: $delete_fn:ident => $delete_op:tt $(,)?
    ) => {
        #[utoipa::path(
            get,
            path = $collection,
            operation_id = $list_op,
            params($query),
            responses(
                (status = 200, description = "Page of records", body = ApiResponse<Page<$model>>),
                (status = 400, description = "Invalid filter or pagination parameters")
            ),
            tag = $tag
        )]
        pub async fn $list_fn(
            State(service): State<Arc<ResourceService<$model>>>,
            AppQuery(query): AppQuery<$query>,
        ) -> Result<Json<ApiResponse<Page<$model>>>> {
            $crate::modules::resource::handlers::list(&service, query).await
        }

        #[utoipa::path(
            post,
            path = $collection,
            operation_id = $create_op,
            request_body = $create,
            responses(
                (status = 201, description = "Record created", body = ApiResponse<$model>),
                (status = 400, description = "Validation error"),
                (status = 401, description = "Unauthorized"),
                (status = 403, description = "Forbidden")
            ),
            tag = $tag,
            security(("bearer_auth" = []))
        )]
        pub async fn $create_fn(
            _guard: RequireManageUsers,
            State(service): State<Arc<ResourceService<$model>>>,
            AppJson(dto): AppJson<$create>,
        ) -> Result<(StatusCode, Json<ApiResponse<$model>>)> {
            $crate::modules::resource::handlers::create(&service, dto).await
        }

        #[utoipa::path(
            get,
            path = $item,
            operation_id = $get_op,
            params(("id" = Uuid, Path, description = "Record identity")),
            responses(
                (status = 200, description = "Record", body = ApiResponse<$model>),
                (status = 400, description = "Malformed identity"),
                (status = 404, description = "Not found")
            ),
            tag = $tag
        )]
        pub async fn $get_fn(
            State(service): State<Arc<ResourceService<$model>>>,
            AppPath(id): AppPath<Uuid>,
        ) -> Result<Json<ApiResponse<$model>>> {
            $crate::modules::resource::handlers::get(&service, id).await
        }

        #[utoipa::path(
            patch,
            path = $item,
            operation_id = $update_op,
            params(("id" = Uuid, Path, description = "Record identity")),
            request_body = $update,
            responses(
                (status = 200, description = "Record updated", body = ApiResponse<$model>),
                (status = 400, description = "Validation error"),
                (status = 401, description = "Unauthorized"),
                (status = 403, description = "Forbidden"),
                (status = 404, description = "Not found")
            ),
            tag = $tag,
            security(("bearer_auth" = []))
        )]
        pub async fn $update_fn(
            _guard: RequireManageUsers,
            State(service): State<Arc<ResourceService<$model>>>,
            AppPath(id): AppPath<Uuid>,
            AppJson(dto): AppJson<$update>,
        ) -> Result<Json<ApiResponse<$model>>> {
            $crate::modules::resource::handlers::update(&service, id, dto).await
        }

        #[utoipa::path(
            delete,
            path = $item,
            operation_id = $delete_op,
            params(("id" = Uuid, Path, description = "Record identity")),
            responses(
                (status = 204, description = "Record deleted"),
                (status = 401, description = "Unauthorized"),
                (status = 403, description = "Forbidden"),
                (status = 404, description = "Not found")
            ),
            tag = $tag,
            security(("bearer_auth" = []))
        )]
        pub async fn $delete_fn(
            _guard: RequireManageUsers,
            State(service): State<Arc<ResourceService<$model>>>,
            AppPath(id): AppPath<Uuid>,
        ) -> Result<StatusCode> {
            $crate::modules::resource::handlers::delete(&service, id).await
        }
    };
}
