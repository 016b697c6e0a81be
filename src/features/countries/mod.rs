//! Country reference data.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/countries` | List countries (filter, sort, paginate) |
//! | POST | `/api/countries` | Create a country |
//! | GET | `/api/countries/code/{code}` | Get a country by code |
//! | GET | `/api/countries/{id}` | Get a country |
//! | PATCH | `/api/countries/{id}` | Update a country |
//! | DELETE | `/api/countries/{id}` | Delete a country |
//!
//! `code` is unique across countries when present.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CountryService;
