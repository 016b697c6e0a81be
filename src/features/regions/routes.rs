use axum::{routing::get, Router};

use crate::features::regions::handlers;
use crate::features::regions::services::RegionServices;

/// Create routes for the regions feature
pub fn routes(services: RegionServices) -> Router {
    let provinces = Router::new()
        .route(
            "/api/regions/provinces",
            get(handlers::list_provinces).post(handlers::create_province),
        )
        .route(
            "/api/regions/provinces/{id}",
            get(handlers::get_province)
                .patch(handlers::update_province)
                .delete(handlers::delete_province),
        )
        .with_state(services.provinces);

    let regencies = Router::new()
        .route(
            "/api/regions/regencies",
            get(handlers::list_regencies).post(handlers::create_regency),
        )
        .route(
            "/api/regions/regencies/{id}",
            get(handlers::get_regency)
                .patch(handlers::update_regency)
                .delete(handlers::delete_regency),
        )
        .with_state(services.regencies);

    let districts = Router::new()
        .route(
            "/api/regions/districts",
            get(handlers::list_districts).post(handlers::create_district),
        )
        .route(
            "/api/regions/districts/{id}",
            get(handlers::get_district)
                .patch(handlers::update_district)
                .delete(handlers::delete_district),
        )
        .with_state(services.districts);

    let villages = Router::new()
        .route(
            "/api/regions/villages",
            get(handlers::list_villages).post(handlers::create_village),
        )
        .route(
            "/api/regions/villages/{id}",
            get(handlers::get_village)
                .patch(handlers::update_village)
                .delete(handlers::delete_village),
        )
        .with_state(services.villages);

    provinces.merge(regencies).merge(districts).merge(villages)
}
