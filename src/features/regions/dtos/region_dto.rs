use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::modules::resource::ListQuery;
use crate::shared::validation::CODE_REGEX;

/// Request body for creating a province
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateProvinceDto {
    #[validate(
        length(min = 1, max = 32, message = "kd_province must be 1-32 characters"),
        regex(path = *CODE_REGEX, message = "kd_province may only contain letters, digits, '.', '_' and '-'")
    )]
    #[schema(example = "32")]
    pub kd_province: String,

    #[validate(length(min = 1, max = 255, message = "name_province must be 1-255 characters"))]
    #[schema(example = "Jawa Barat")]
    pub name_province: Option<String>,
}

crate::impl_field_values!(CreateProvinceDto, required: [kd_province], optional: [name_province]);

/// Request body for a partial province update
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateProvinceDto {
    #[validate(
        length(min = 1, max = 32, message = "kd_province must be 1-32 characters"),
        regex(path = *CODE_REGEX, message = "kd_province may only contain letters, digits, '.', '_' and '-'")
    )]
    pub kd_province: Option<String>,

    #[validate(length(min = 1, max = 255, message = "name_province must be 1-255 characters"))]
    pub name_province: Option<String>,
}

crate::impl_field_values!(UpdateProvinceDto, required: [], optional: [kd_province, name_province]);

/// Filter and pagination parameters for listing provinces
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(deny_unknown_fields)]
#[into_params(parameter_in = Query)]
pub struct ProvinceQuery {
    pub kd_province: Option<String>,
    pub name_province: Option<String>,
    /// Comma-separated `field[:asc|:desc]` criteria
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    /// Page size (default 10, max 100)
    pub limit: Option<i64>,
    /// Page number, starting at 1
    pub page: Option<i64>,
}

crate::impl_field_values!(ProvinceQuery, required: [], optional: [kd_province, name_province]);

/// Request body for creating a regency
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateRegencyDto {
    /// Identity of the parent province
    #[validate(length(min = 1, max = 64, message = "id_province must be 1-64 characters"))]
    pub id_province: String,

    #[validate(
        length(min = 1, max = 32, message = "kd_province must be 1-32 characters"),
        regex(path = *CODE_REGEX, message = "kd_province may only contain letters, digits, '.', '_' and '-'")
    )]
    #[schema(example = "32")]
    pub kd_province: String,

    #[validate(
        length(min = 1, max = 32, message = "kd_regency must be 1-32 characters"),
        regex(path = *CODE_REGEX, message = "kd_regency may only contain letters, digits, '.', '_' and '-'")
    )]
    #[schema(example = "32.73")]
    pub kd_regency: String,

    #[validate(length(min = 1, max = 255, message = "name_regency must be 1-255 characters"))]
    #[schema(example = "Kota Bandung")]
    pub name_regency: Option<String>,
}

crate::impl_field_values!(
    CreateRegencyDto,
    required: [id_province, kd_province, kd_regency],
    optional: [name_regency],
);

/// Request body for a partial regency update
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateRegencyDto {
    #[validate(length(min = 1, max = 64, message = "id_province must be 1-64 characters"))]
    pub id_province: Option<String>,

    #[validate(
        length(min = 1, max = 32, message = "kd_province must be 1-32 characters"),
        regex(path = *CODE_REGEX, message = "kd_province may only contain letters, digits, '.', '_' and '-'")
    )]
    pub kd_province: Option<String>,

    #[validate(
        length(min = 1, max = 32, message = "kd_regency must be 1-32 characters"),
        regex(path = *CODE_REGEX, message = "kd_regency may only contain letters, digits, '.', '_' and '-'")
    )]
    pub kd_regency: Option<String>,

    #[validate(length(min = 1, max = 255, message = "name_regency must be 1-255 characters"))]
    pub name_regency: Option<String>,
}

crate::impl_field_values!(
    UpdateRegencyDto,
    required: [],
    optional: [id_province, kd_province, kd_regency, name_regency],
);

/// Filter and pagination parameters for listing regencies
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(deny_unknown_fields)]
#[into_params(parameter_in = Query)]
pub struct RegencyQuery {
    pub id_province: Option<String>,
    pub kd_province: Option<String>,
    pub kd_regency: Option<String>,
    pub name_regency: Option<String>,
    /// Comma-separated `field[:asc|:desc]` criteria
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    /// Page size (default 10, max 100)
    pub limit: Option<i64>,
    /// Page number, starting at 1
    pub page: Option<i64>,
}

crate::impl_field_values!(
    RegencyQuery,
    required: [],
    optional: [id_province, kd_province, kd_regency, name_regency],
);

/// Request body for creating a district
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateDistrictDto {
    /// Identity of the parent regency
    #[validate(length(min = 1, max = 64, message = "id_regency must be 1-64 characters"))]
    pub id_regency: String,

    #[validate(
        length(min = 1, max = 32, message = "kd_regency must be 1-32 characters"),
        regex(path = *CODE_REGEX, message = "kd_regency may only contain letters, digits, '.', '_' and '-'")
    )]
    #[schema(example = "32.73")]
    pub kd_regency: String,

    #[validate(
        length(min = 1, max = 32, message = "kd_district must be 1-32 characters"),
        regex(path = *CODE_REGEX, message = "kd_district may only contain letters, digits, '.', '_' and '-'")
    )]
    #[schema(example = "32.73.01")]
    pub kd_district: String,

    #[validate(length(min = 1, max = 255, message = "name_district must be 1-255 characters"))]
    #[schema(example = "Sukasari")]
    pub name_district: Option<String>,
}

crate::impl_field_values!(
    CreateDistrictDto,
    required: [id_regency, kd_regency, kd_district],
    optional: [name_district],
);

/// Request body for a partial district update
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateDistrictDto {
    #[validate(length(min = 1, max = 64, message = "id_regency must be 1-64 characters"))]
    pub id_regency: Option<String>,

    #[validate(
        length(min = 1, max = 32, message = "kd_regency must be 1-32 characters"),
        regex(path = *CODE_REGEX, message = "kd_regency may only contain letters, digits, '.', '_' and '-'")
    )]
    pub kd_regency: Option<String>,

    #[validate(
        length(min = 1, max = 32, message = "kd_district must be 1-32 characters"),
        regex(path = *CODE_REGEX, message = "kd_district may only contain letters, digits, '.', '_' and '-'")
    )]
    pub kd_district: Option<String>,

    #[validate(length(min = 1, max = 255, message = "name_district must be 1-255 characters"))]
    pub name_district: Option<String>,
}

crate::impl_field_values!(
    UpdateDistrictDto,
    required: [],
    optional: [id_regency, kd_regency, kd_district, name_district],
);

/// Filter and pagination parameters for listing districts
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(deny_unknown_fields)]
#[into_params(parameter_in = Query)]
pub struct DistrictQuery {
    pub id_regency: Option<String>,
    pub kd_regency: Option<String>,
    pub kd_district: Option<String>,
    pub name_district: Option<String>,
    /// Comma-separated `field[:asc|:desc]` criteria
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    /// Page size (default 10, max 100)
    pub limit: Option<i64>,
    /// Page number, starting at 1
    pub page: Option<i64>,
}

crate::impl_field_values!(
    DistrictQuery,
    required: [],
    optional: [id_regency, kd_regency, kd_district, name_district],
);

/// Request body for creating a village
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateVillageDto {
    /// Identity of the parent district
    #[validate(length(min = 1, max = 64, message = "id_districts must be 1-64 characters"))]
    pub id_districts: String,

    #[validate(
        length(min = 1, max = 32, message = "kd_districts must be 1-32 characters"),
        regex(path = *CODE_REGEX, message = "kd_districts may only contain letters, digits, '.', '_' and '-'")
    )]
    #[schema(example = "32.73.01")]
    pub kd_districts: String,

    #[validate(
        length(min = 1, max = 32, message = "kd_village must be 1-32 characters"),
        regex(path = *CODE_REGEX, message = "kd_village may only contain letters, digits, '.', '_' and '-'")
    )]
    #[schema(example = "32.73.01.1001")]
    pub kd_village: String,

    #[validate(length(min = 1, max = 255, message = "name_village must be 1-255 characters"))]
    #[schema(example = "Gegerkalong")]
    pub name_village: Option<String>,
}

crate::impl_field_values!(
    CreateVillageDto,
    required: [id_districts, kd_districts, kd_village],
    optional: [name_village],
);

/// Request body for a partial village update
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateVillageDto {
    #[validate(length(min = 1, max = 64, message = "id_districts must be 1-64 characters"))]
    pub id_districts: Option<String>,

    #[validate(
        length(min = 1, max = 32, message = "kd_districts must be 1-32 characters"),
        regex(path = *CODE_REGEX, message = "kd_districts may only contain letters, digits, '.', '_' and '-'")
    )]
    pub kd_districts: Option<String>,

    #[validate(
        length(min = 1, max = 32, message = "kd_village must be 1-32 characters"),
        regex(path = *CODE_REGEX, message = "kd_village may only contain letters, digits, '.', '_' and '-'")
    )]
    pub kd_village: Option<String>,

    #[validate(length(min = 1, max = 255, message = "name_village must be 1-255 characters"))]
    pub name_village: Option<String>,
}

crate::impl_field_values!(
    UpdateVillageDto,
    required: [],
    optional: [id_districts, kd_districts, kd_village, name_village],
);

/// Filter and pagination parameters for listing villages
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(deny_unknown_fields)]
#[into_params(parameter_in = Query)]
pub struct VillageQuery {
    pub id_districts: Option<String>,
    pub kd_districts: Option<String>,
    pub kd_village: Option<String>,
    pub name_village: Option<String>,
    /// Comma-separated `field[:asc|:desc]` criteria
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    /// Page size (default 10, max 100)
    pub limit: Option<i64>,
    /// Page number, starting at 1
    pub page: Option<i64>,
}

crate::impl_field_values!(
    VillageQuery,
    required: [],
    optional: [id_districts, kd_districts, kd_village, name_village],
);

macro_rules! impl_list_query {
    ($($query:ty),* $(,)?) => {
        $(
            impl ListQuery for $query {
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
        )*
    };
}

impl_list_query!(ProvinceQuery, RegencyQuery, DistrictQuery, VillageQuery);
