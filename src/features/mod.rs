pub mod auth;
pub mod countries;
pub mod regions;
