use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::auth::guards::RequireManageUsers;
use crate::features::countries::dtos::{CountryQuery, CreateCountryDto, UpdateCountryDto};
use crate::features::countries::models::Country;
use crate::features::countries::services::CountryService;
use crate::modules::resource::ResourceService;
use crate::shared::pagination::Page;
use crate::shared::types::ApiResponse;

crate::resource_handlers! {
    model: Country,
    create_dto: CreateCountryDto,
    update_dto: UpdateCountryDto,
    query: CountryQuery,
    tag: "countries",
    collection: "/api/countries",
    item: "/api/countries/{id}",
    list: list_countries => "list_countries",
    create: create_country => "create_country",
    get: get_country => "get_country",
    update: update_country => "update_country",
    delete: delete_country => "delete_country",
}

/// Get a country by its code
#[utoipa::path(
    get,
    path = "/api/countries/code/{code}",
    params(
        ("code" = String, Path, description = "Country code")
    ),
    responses(
        (status = 200, description = "Country details", body = ApiResponse<Country>),
        (status = 404, description = "Country not found")
    ),
    tag = "countries"
)]
pub async fn get_country_by_code(
    State(service): State<Arc<CountryService>>,
    AppPath(code): AppPath<String>,
) -> Result<Json<ApiResponse<Country>>> {
    let country = service
        .get_by_code(&code)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Country with code '{}' not found", code)))?;

    Ok(Json(ApiResponse::success(Some(country), None, None)))
}
