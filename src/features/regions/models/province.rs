use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::regions::dtos::{CreateProvinceDto, UpdateProvinceDto};
use crate::modules::resource::{trimmed, trimmed_opt, FieldSpec, Resource, ResourceSchema};

static PROVINCE_FIELDS: [FieldSpec; 2] = [
    FieldSpec::required("kd_province"),
    FieldSpec::optional("name_province"),
];

pub static PROVINCE_SCHEMA: ResourceSchema = ResourceSchema {
    kind: "Province",
    table: "provinces",
    fields: &PROVINCE_FIELDS,
};

/// Province model representing Indonesian provinces (provinsi)
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize, ToSchema)]
pub struct Province {
    pub id: Uuid,
    #[schema(example = "32")]
    pub kd_province: String,
    #[schema(example = "Jawa Barat")]
    pub name_province: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

crate::impl_field_values!(Province, required: [kd_province], optional: [name_province]);

impl Resource for Province {
    type Create = CreateProvinceDto;
    type Update = UpdateProvinceDto;

    fn schema() -> &'static ResourceSchema {
        &PROVINCE_SCHEMA
    }

    fn from_input(id: Uuid, now: DateTime<Utc>, input: CreateProvinceDto) -> Self {
        Self {
            id,
            kd_province: trimmed(input.kd_province),
            name_province: trimmed_opt(input.name_province),
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, patch: UpdateProvinceDto) {
        if let Some(kd_province) = patch.kd_province {
            self.kd_province = trimmed(kd_province);
        }
        if let Some(name_province) = patch.name_province {
            self.name_province = Some(trimmed(name_province));
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
