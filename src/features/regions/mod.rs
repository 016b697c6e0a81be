//! Indonesian administrative regions (wilayah) feature.
//!
//! ## Data Hierarchy
//!
//! - Level 1: Provinces (Provinsi)
//! - Level 2: Regencies/Cities (Kabupaten/Kota), `id_province` -> Province
//! - Level 3: Districts (Kecamatan), `id_regency` -> Regency
//! - Level 4: Villages (Kelurahan/Desa), `id_districts` -> District
//!
//! Parent references are stored as given and never checked; deleting a parent
//! leaves its children untouched.
//!
//! ## Endpoints
//!
//! Each level exposes the same five operations under
//! `/api/regions/{provinces,regencies,districts,villages}`:
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/regions/{level}` | List (filter, sort, paginate) |
//! | POST | `/api/regions/{level}` | Create |
//! | GET | `/api/regions/{level}/{id}` | Get by id |
//! | PATCH | `/api/regions/{level}/{id}` | Partial update |
//! | DELETE | `/api/regions/{level}/{id}` | Delete |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::RegionServices;
