use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::regions::dtos::{CreateVillageDto, UpdateVillageDto};
use crate::modules::resource::{trimmed, trimmed_opt, FieldSpec, Resource, ResourceSchema};

static VILLAGE_FIELDS: [FieldSpec; 4] = [
    FieldSpec::required("id_districts"),
    FieldSpec::required("kd_districts"),
    FieldSpec::required("kd_village"),
    FieldSpec::optional("name_village"),
];

pub static VILLAGE_SCHEMA: ResourceSchema = ResourceSchema {
    kind: "Village",
    table: "villages",
    fields: &VILLAGE_FIELDS,
};

/// Village model representing Indonesian villages (kelurahan/desa)
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize, ToSchema)]
pub struct Village {
    pub id: Uuid,
    pub id_districts: String,
    #[schema(example = "32.73.01")]
    pub kd_districts: String,
    #[schema(example = "32.73.01.1001")]
    pub kd_village: String,
    #[schema(example = "Gegerkalong")]
    pub name_village: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

crate::impl_field_values!(
    Village,
    required: [id_districts, kd_districts, kd_village],
    optional: [name_village],
);

impl Resource for Village {
    type Create = CreateVillageDto;
    type Update = UpdateVillageDto;

    fn schema() -> &'static ResourceSchema {
        &VILLAGE_SCHEMA
    }

    fn from_input(id: Uuid, now: DateTime<Utc>, input: CreateVillageDto) -> Self {
        Self {
            id,
            id_districts: trimmed(input.id_districts),
            kd_districts: trimmed(input.kd_districts),
            kd_village: trimmed(input.kd_village),
            name_village: trimmed_opt(input.name_village),
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, patch: UpdateVillageDto) {
        if let Some(id_districts) = patch.id_districts {
            self.id_districts = trimmed(id_districts);
        }
        if let Some(kd_districts) = patch.kd_districts {
            self.kd_districts = trimmed(kd_districts);
        }
        if let Some(kd_village) = patch.kd_village {
            self.kd_village = trimmed(kd_village);
        }
        if let Some(name_village) = patch.name_village {
            self.name_village = Some(trimmed(name_village));
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
