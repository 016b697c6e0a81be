use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::auth::guards::RequireManageUsers;
use crate::features::regions::dtos::{
    CreateDistrictDto, CreateProvinceDto, CreateRegencyDto, CreateVillageDto, DistrictQuery,
    ProvinceQuery, RegencyQuery, UpdateDistrictDto, UpdateProvinceDto, UpdateRegencyDto,
    UpdateVillageDto, VillageQuery,
};
use crate::features::regions::models::{District, Province, Regency, Village};
use crate::modules::resource::ResourceService;
use crate::shared::pagination::Page;
use crate::shared::types::ApiResponse;

// ==================== Province Handlers ====================

crate::resource_handlers! {
    model: Province,
    create_dto: CreateProvinceDto,
    update_dto: UpdateProvinceDto,
    query: ProvinceQuery,
    tag: "regions",
    collection: "/api/regions/provinces",
    item: "/api/regions/provinces/{id}",
    list: list_provinces => "list_provinces",
    create: create_province => "create_province",
    get: get_province => "get_province",
    update: update_province => "update_province",
    delete: delete_province => "delete_province",
}

// ==================== Regency Handlers ====================

crate::resource_handlers! {
    model: Regency,
    create_dto: CreateRegencyDto,
    update_dto: UpdateRegencyDto,
    query: RegencyQuery,
    tag: "regions",
    collection: "/api/regions/regencies",
    item: "/api/regions/regencies/{id}",
    list: list_regencies => "list_regencies",
    create: create_regency => "create_regency",
    get: get_regency => "get_regency",
    update: update_regency => "update_regency",
    delete: delete_regency => "delete_regency",
}

// ==================== District Handlers ====================

crate::resource_handlers! {
    model: District,
    create_dto: CreateDistrictDto,
    update_dto: UpdateDistrictDto,
    query: DistrictQuery,
    tag: "regions",
    collection: "/api/regions/districts",
    item: "/api/regions/districts/{id}",
    list: list_districts => "list_districts",
    create: create_district => "create_district",
    get: get_district => "get_district",
    update: update_district => "update_district",
    delete: delete_district => "delete_district",
}

// ==================== Village Handlers ====================

crate::resource_handlers! {
    model: Village,
    create_dto: CreateVillageDto,
    update_dto: UpdateVillageDto,
    query: VillageQuery,
    tag: "regions",
    collection: "/api/regions/villages",
    item: "/api/regions/villages/{id}",
    list: list_villages => "list_villages",
    create: create_village => "create_village",
    get: get_village => "get_village",
    update: update_village => "update_village",
    delete: delete_village => "delete_village",
}
