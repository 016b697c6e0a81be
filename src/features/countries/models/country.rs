use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::countries::dtos::{CreateCountryDto, UpdateCountryDto};
use crate::modules::resource::{trimmed, trimmed_opt, FieldSpec, Resource, ResourceSchema};

static COUNTRY_FIELDS: [FieldSpec; 2] = [
    FieldSpec::required("name_country"),
    FieldSpec::optional("code").unique(),
];

pub static COUNTRY_SCHEMA: ResourceSchema = ResourceSchema {
    kind: "Country",
    table: "countries",
    fields: &COUNTRY_FIELDS,
};

/// Country model
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize, ToSchema)]
pub struct Country {
    pub id: Uuid,
    #[schema(example = "Indonesia")]
    pub name_country: String,
    #[schema(example = "ID")]
    pub code: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

crate::impl_field_values!(Country, required: [name_country], optional: [code]);

impl Resource for Country {
    type Create = CreateCountryDto;
    type Update = UpdateCountryDto;

    fn schema() -> &'static ResourceSchema {
        &COUNTRY_SCHEMA
    }

    fn from_input(id: Uuid, now: DateTime<Utc>, input: CreateCountryDto) -> Self {
        Self {
            id,
            name_country: trimmed(input.name_country),
            code: trimmed_opt(input.code),
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, patch: UpdateCountryDto) {
        if let Some(name_country) = patch.name_country {
            self.name_country = trimmed(name_country);
        }
        if let Some(code) = patch.code {
            self.code = Some(trimmed(code));
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
