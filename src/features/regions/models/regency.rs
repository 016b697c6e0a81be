use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::regions::dtos::{CreateRegencyDto, UpdateRegencyDto};
use crate::modules::resource::{trimmed, trimmed_opt, FieldSpec, Resource, ResourceSchema};

static REGENCY_FIELDS: [FieldSpec; 4] = [
    FieldSpec::required("id_province"),
    FieldSpec::required("kd_province"),
    FieldSpec::required("kd_regency"),
    FieldSpec::optional("name_regency"),
];

pub static REGENCY_SCHEMA: ResourceSchema = ResourceSchema {
    kind: "Regency",
    table: "regencies",
    fields: &REGENCY_FIELDS,
};

/// Regency model representing Indonesian regencies/cities (kabupaten/kota)
///
/// `id_province` holds the parent province identity as an opaque string; it is
/// not checked against existing provinces.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize, ToSchema)]
pub struct Regency {
    pub id: Uuid,
    pub id_province: String,
    #[schema(example = "32")]
    pub kd_province: String,
    #[schema(example = "32.73")]
    pub kd_regency: String,
    #[schema(example = "Kota Bandung")]
    pub name_regency: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

crate::impl_field_values!(
    Regency,
    required: [id_province, kd_province, kd_regency],
    optional: [name_regency],
);

impl Resource for Regency {
    type Create = CreateRegencyDto;
    type Update = UpdateRegencyDto;

    fn schema() -> &'static ResourceSchema {
        &REGENCY_SCHEMA
    }

    fn from_input(id: Uuid, now: DateTime<Utc>, input: CreateRegencyDto) -> Self {
        Self {
            id,
            id_province: trimmed(input.id_province),
            kd_province: trimmed(input.kd_province),
            kd_regency: trimmed(input.kd_regency),
            name_regency: trimmed_opt(input.name_regency),
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, patch: UpdateRegencyDto) {
        if let Some(id_province) = patch.id_province {
            self.id_province = trimmed(id_province);
        }
        if let Some(kd_province) = patch.kd_province {
            self.kd_province = trimmed(kd_province);
        }
        if let Some(kd_regency) = patch.kd_regency {
            self.kd_regency = trimmed(kd_regency);
        }
        if let Some(name_regency) = patch.name_regency {
            self.name_regency = Some(trimmed(name_regency));
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
