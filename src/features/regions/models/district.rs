use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::regions::dtos::{CreateDistrictDto, UpdateDistrictDto};
use crate::modules::resource::{trimmed, trimmed_opt, FieldSpec, Resource, ResourceSchema};

static DISTRICT_FIELDS: [FieldSpec; 4] = [
    FieldSpec::required("id_regency"),
    FieldSpec::required("kd_regency"),
    FieldSpec::required("kd_district"),
    FieldSpec::optional("name_district"),
];

pub static DISTRICT_SCHEMA: ResourceSchema = ResourceSchema {
    kind: "District",
    table: "districts",
    fields: &DISTRICT_FIELDS,
};

/// District model representing Indonesian districts (kecamatan)
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize, ToSchema)]
pub struct District {
    pub id: Uuid,
    pub id_regency: String,
    #[schema(example = "32.73")]
    pub kd_regency: String,
    #[schema(example = "32.73.01")]
    pub kd_district: String,
    #[schema(example = "Sukasari")]
    pub name_district: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

crate::impl_field_values!(
    District,
    required: [id_regency, kd_regency, kd_district],
    optional: [name_district],
);

impl Resource for District {
    type Create = CreateDistrictDto;
    type Update = UpdateDistrictDto;

    fn schema() -> &'static ResourceSchema {
        &DISTRICT_SCHEMA
    }

    fn from_input(id: Uuid, now: DateTime<Utc>, input: CreateDistrictDto) -> Self {
        Self {
            id,
            id_regency: trimmed(input.id_regency),
            kd_regency: trimmed(input.kd_regency),
            kd_district: trimmed(input.kd_district),
            name_district: trimmed_opt(input.name_district),
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, patch: UpdateDistrictDto) {
        if let Some(id_regency) = patch.id_regency {
            self.id_regency = trimmed(id_regency);
        }
        if let Some(kd_regency) = patch.kd_regency {
            self.kd_regency = trimmed(kd_regency);
        }
        if let Some(kd_district) = patch.kd_district {
            self.kd_district = trimmed(kd_district);
        }
        if let Some(name_district) = patch.name_district {
            self.name_district = Some(trimmed(name_district));
        }
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}
