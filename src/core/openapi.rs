use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::countries::{
    dtos as countries_dtos, handlers as countries_handlers, models as countries_models,
};
use crate::features::regions::{
    dtos as regions_dtos, handlers as regions_handlers, models as regions_models,
};
use crate::shared::pagination::Page;
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Countries
        countries_handlers::list_countries,
        countries_handlers::create_country,
        countries_handlers::get_country_by_code,
        countries_handlers::get_country,
        countries_handlers::update_country,
        countries_handlers::delete_country,
        // Provinces
        regions_handlers::list_provinces,
        regions_handlers::create_province,
        regions_handlers::get_province,
        regions_handlers::update_province,
        regions_handlers::delete_province,
        // Regencies
        regions_handlers::list_regencies,
        regions_handlers::create_regency,
        regions_handlers::get_regency,
        regions_handlers::update_regency,
        regions_handlers::delete_regency,
        // Districts
        regions_handlers::list_districts,
        regions_handlers::create_district,
        regions_handlers::get_district,
        regions_handlers::update_district,
        regions_handlers::delete_district,
        // Villages
        regions_handlers::list_villages,
        regions_handlers::create_village,
        regions_handlers::get_village,
        regions_handlers::update_village,
        regions_handlers::delete_village,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Countries
            countries_models::Country,
            countries_dtos::CreateCountryDto,
            countries_dtos::UpdateCountryDto,
            ApiResponse<countries_models::Country>,
            ApiResponse<Page<countries_models::Country>>,
            // Regions
            regions_models::Province,
            regions_models::Regency,
            regions_models::District,
            regions_models::Village,
            regions_dtos::CreateProvinceDto,
            regions_dtos::UpdateProvinceDto,
            regions_dtos::CreateRegencyDto,
            regions_dtos::UpdateRegencyDto,
            regions_dtos::CreateDistrictDto,
            regions_dtos::UpdateDistrictDto,
            regions_dtos::CreateVillageDto,
            regions_dtos::UpdateVillageDto,
            ApiResponse<regions_models::Province>,
            ApiResponse<Page<regions_models::Province>>,
            ApiResponse<regions_models::Regency>,
            ApiResponse<Page<regions_models::Regency>>,
            ApiResponse<regions_models::District>,
            ApiResponse<Page<regions_models::District>>,
            ApiResponse<regions_models::Village>,
            ApiResponse<Page<regions_models::Village>>,
        )
    ),
    tags(
        (name = "countries", description = "Country reference data"),
        (name = "regions", description = "Indonesian administrative regions (provinces, regencies, districts, villages)"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Wilayah API",
        version = "0.1.0",
        description = "Countries and Indonesian administrative regions reference data",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for path in [
            "/api/countries",
            "/api/countries/{id}",
            "/api/countries/code/{code}",
            "/api/regions/provinces",
            "/api/regions/provinces/{id}",
            "/api/regions/regencies/{id}",
            "/api/regions/districts/{id}",
            "/api/regions/villages/{id}",
        ] {
            assert!(paths.contains_key(path), "missing {}", path);
        }

        let item = &paths["/api/countries/{id}"];
        assert!(item.get.is_some());
        assert!(item.patch.is_some());
        assert!(item.delete.is_some());
    }
}
