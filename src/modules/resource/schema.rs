use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};
use sqlx::{postgres::PgRow, FromRow};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::shared::pagination::{Filter, PageOptions};

/// Columns every resource carries besides its data fields
pub const SYSTEM_FIELDS: [&str; 3] = ["id", "created_at", "updated_at"];

/// One data field of a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub required: bool,
    pub filterable: bool,
    pub unique: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            required: true,
            filterable: true,
            unique: false,
        }
    }

    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            required: false,
            filterable: true,
            unique: false,
        }
    }

    pub const fn unique(self) -> Self {
        Self {
            unique: true,
            ..self
        }
    }
}

/// Static description of a resource kind: its table and data fields.
///
/// Column, filter and sort names are only ever taken from here, never from
/// request text.
#[derive(Debug)]
pub struct ResourceSchema {
    pub kind: &'static str,
    pub table: &'static str,
    pub fields: &'static [FieldSpec],
}

impl ResourceSchema {
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Canonical name of a sortable field: any data field or system column
    pub fn sort_field(&self, name: &str) -> Option<&'static str> {
        self.field(name)
            .map(|f| f.name)
            .or_else(|| SYSTEM_FIELDS.iter().copied().find(|f| *f == name))
    }

    pub fn unique_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().filter(|f| f.unique).map(|f| f.name)
    }

    /// Exact-match filter built from the filterable fields present in `values`.
    /// Values are trimmed the same way stored fields are.
    pub fn filter_from(&self, values: &impl FieldValues) -> Filter {
        self.fields
            .iter()
            .filter(|f| f.filterable)
            .fold(Filter::new(), |filter, f| match values.value(f.name) {
                Some(value) => filter.eq(f.name, value.trim()),
                None => filter,
            })
    }

    /// Required fields must be present and not blank
    pub fn check_create(&self, values: &impl FieldValues) -> Result<()> {
        let missing: Vec<String> = self
            .fields
            .iter()
            .filter(|f| f.required)
            .filter(|f| values.value(f.name).is_none_or(|v| v.trim().is_empty()))
            .map(|f| format!("{} is required", f.name))
            .collect();

        validation_result(missing)
    }

    /// A patch must touch at least one field and cannot blank a required one
    pub fn check_update(&self, values: &impl FieldValues) -> Result<()> {
        if self.fields.iter().all(|f| values.value(f.name).is_none()) {
            return Err(AppError::Validation(
                "At least one field must be provided".to_string(),
            ));
        }

        let blanked: Vec<String> = self
            .fields
            .iter()
            .filter(|f| f.required)
            .filter(|f| values.value(f.name).is_some_and(|v| v.trim().is_empty()))
            .map(|f| format!("{} cannot be empty", f.name))
            .collect();

        validation_result(blanked)
    }

    /// Page options with `sortBy` names resolved against this schema
    pub fn page_options(&self, query: &impl ListQuery) -> Result<PageOptions> {
        PageOptions::parse(query.sort_by(), query.limit(), query.page(), |name| {
            self.sort_field(name)
        })
    }
}

fn validation_result(problems: Vec<String>) -> Result<()> {
    if problems.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(problems.join(", ")))
    }
}

/// Read access to a value's string fields by schema name
pub trait FieldValues {
    fn value(&self, field: &str) -> Option<&str>;
}

/// Pagination parameters carried by every list query
pub trait ListQuery {
    fn sort_by(&self) -> Option<&str>;
    fn limit(&self) -> Option<i64>;
    fn page(&self) -> Option<i64>;
}

/// A persisted reference-data record
pub trait Resource:
    FieldValues + Clone + Serialize + Send + Sync + Unpin + for<'r> FromRow<'r, PgRow> + 'static
{
    type Create: FieldValues + Validate + DeserializeOwned + Send + Sync + 'static;
    type Update: FieldValues + Validate + DeserializeOwned + Send + Sync + 'static;

    fn schema() -> &'static ResourceSchema;

    /// Build a new record; string fields are trimmed
    fn from_input(id: Uuid, now: DateTime<Utc>, input: Self::Create) -> Self;

    /// Merge the fields present in `patch`; string fields are trimmed
    fn apply(&mut self, patch: Self::Update);

    fn id(&self) -> Uuid;
    fn created_at(&self) -> DateTime<Utc>;
    fn updated_at(&self) -> DateTime<Utc>;
    fn touch(&mut self, now: DateTime<Utc>);
}

/// Trim a required string field
pub fn trimmed(value: String) -> String {
    let t = value.trim();
    if t.len() == value.len() {
        value
    } else {
        t.to_string()
    }
}

/// Trim an optional string field
pub fn trimmed_opt(value: Option<String>) -> Option<String> {
    value.map(trimmed)
}

/// Implement [`FieldValues`] for a struct whose listed fields are `String`
/// (`required`) or `Option<String>` (`optional`).
#[macro_export]
macro_rules! impl_field_values {
    ($ty:ty, required: [$($req:ident),* $(,)?], optional: [$($opt:ident),* $(,)?] $(,)?) => {
        impl $crate::modules::resource::FieldValues for $ty {
            fn value(&self, field: &str) -> Option<&str> {
                match field {
                    $(stringify!($req) => Some(self.$req.as_str()),)*
                    $(stringify!($opt) => self.$opt.as_deref(),)*
                    _ => None,
                }
            }
        }
    };
}
