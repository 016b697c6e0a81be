use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::modules::resource::ListQuery;
use crate::shared::validation::CODE_REGEX;

/// Request body for creating a country
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateCountryDto {
    #[validate(length(min = 1, max = 255, message = "name_country must be 1-255 characters"))]
    #[schema(example = "Indonesia")]
    pub name_country: String,

    #[validate(
        length(min = 1, max = 16, message = "code must be 1-16 characters"),
        regex(path = *CODE_REGEX, message = "code may only contain letters, digits, '.', '_' and '-'")
    )]
    #[schema(example = "ID")]
    pub code: Option<String>,
}

crate::impl_field_values!(CreateCountryDto, required: [name_country], optional: [code]);

/// Request body for a partial country update
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateCountryDto {
    #[validate(length(min = 1, max = 255, message = "name_country must be 1-255 characters"))]
    pub name_country: Option<String>,

    #[validate(
        length(min = 1, max = 16, message = "code must be 1-16 characters"),
        regex(path = *CODE_REGEX, message = "code may only contain letters, digits, '.', '_' and '-'")
    )]
    pub code: Option<String>,
}

crate::impl_field_values!(UpdateCountryDto, required: [], optional: [name_country, code]);

/// Filter and pagination parameters for listing countries
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(deny_unknown_fields)]
#[into_params(parameter_in = Query)]
pub struct CountryQuery {
    /// Exact country name
    pub name_country: Option<String>,
    /// Exact country code
    pub code: Option<String>,
    /// Comma-separated `field[:asc|:desc]` criteria
    #[serde(rename = "sortBy")]
    #[param(example = "name_country:asc")]
    pub sort_by: Option<String>,
    /// Page size (default 10, max 100)
    pub limit: Option<i64>,
    /// Page number, starting at 1
    pub page: Option<i64>,
}

crate::impl_field_values!(CountryQuery, required: [], optional: [name_country, code]);

impl ListQuery for CountryQuery {
    fn sort_by(&self) -> Option<&str> {
        self.sort_by.as_deref()
    }

    fn limit(&self) -> Option<i64> {
        self.limit
    }

    fn page(&self) -> Option<i64> {
        self.page
    }
}
