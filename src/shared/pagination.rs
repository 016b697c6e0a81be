//! Filtering, sorting and page arithmetic shared by every list endpoint.
//!
//! A list request is reduced to a [`Filter`] (exact-match conditions) and
//! [`PageOptions`] (sort criteria, limit, page). Stores apply both and hand the
//! matching slice plus the total count to [`Page::new`], which owns the page
//! math so every backend reports identical metadata.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::shared::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// One `field:direction` criterion. The field name always comes from a
/// resource schema, never from request text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: &'static str,
    pub direction: SortDirection,
}

/// Exact-match conditions applied before pagination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub conditions: Vec<(&'static str, String)>,
    /// Identity that must not match (used by uniqueness checks on update)
    pub exclude_id: Option<Uuid>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, field: &'static str, value: impl Into<String>) -> Self {
        self.conditions.push((field, value.into()));
        self
    }

    pub fn exclude(mut self, id: Option<Uuid>) -> Self {
        self.exclude_id = id;
        self
    }
}

/// Validated pagination options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOptions {
    pub sort: Vec<SortSpec>,
    pub limit: i64,
    pub page: i64,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            sort: Vec::new(),
            limit: DEFAULT_PAGE_SIZE,
            page: DEFAULT_PAGE,
        }
    }
}

impl PageOptions {
    /// Build options from raw query values.
    ///
    /// `sort_by` is a comma-separated list of `field[:asc|:desc]`; `resolve_field`
    /// maps a requested field name to its canonical schema name, or `None` when the
    /// field is not sortable. `limit` must be positive (values above
    /// [`MAX_PAGE_SIZE`] are clamped) and `page` must be at least 1.
    pub fn parse<F>(
        sort_by: Option<&str>,
        limit: Option<i64>,
        page: Option<i64>,
        resolve_field: F,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<&'static str>,
    {
        let limit = match limit {
            Some(l) if l <= 0 => {
                return Err(AppError::Validation(
                    "limit must be a positive integer".to_string(),
                ))
            }
            Some(l) => l.min(MAX_PAGE_SIZE),
            None => DEFAULT_PAGE_SIZE,
        };

        let page = match page {
            Some(p) if p < 1 => {
                return Err(AppError::Validation(
                    "page must be greater than or equal to 1".to_string(),
                ))
            }
            Some(p) => p,
            None => DEFAULT_PAGE,
        };

        let sort = match sort_by {
            Some(raw) => parse_sort(raw, resolve_field)?,
            None => Vec::new(),
        };

        Ok(Self { sort, limit, page })
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

fn parse_sort<F>(raw: &str, resolve_field: F) -> Result<Vec<SortSpec>>
where
    F: Fn(&str) -> Option<&'static str>,
{
    let mut specs = Vec::new();

    for criterion in raw.split(',').map(str::trim).filter(|c| !c.is_empty()) {
        let (name, direction) = match criterion.split_once(':') {
            Some((name, "asc")) => (name, SortDirection::Asc),
            Some((name, "desc")) => (name, SortDirection::Desc),
            Some((_, other)) => {
                return Err(AppError::Validation(format!(
                    "Invalid sort direction '{}', expected 'asc' or 'desc'",
                    other
                )))
            }
            None => (criterion, SortDirection::Asc),
        };

        let field = resolve_field(name.trim()).ok_or_else(|| {
            AppError::Validation(format!("Cannot sort by unknown field '{}'", name.trim()))
        })?;

        specs.push(SortSpec { field, direction });
    }

    Ok(specs)
}

/// One page of results plus its metadata.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub results: Vec<T>,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
    pub total_results: i64,
}

impl<T> Page<T> {
    pub fn new(results: Vec<T>, total_results: i64, options: &PageOptions) -> Self {
        Self {
            results,
            page: options.page,
            limit: options.limit,
            total_pages: total_pages(total_results, options.limit),
            total_results,
        }
    }
}

/// `ceil(total / limit)`, zero when there is nothing to page through.
pub fn total_pages(total_results: i64, limit: i64) -> i64 {
    if total_results <= 0 || limit <= 0 {
        return 0;
    }
    (total_results + limit - 1) / limit
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(name: &str) -> Option<&'static str> {
        match name {
            "name" => Some("name"),
            "created_at" => Some("created_at"),
            _ => None,
        }
    }

    #[test]
    fn test_defaults_when_nothing_given() {
        let options = PageOptions::parse(None, None, None, resolve).unwrap();
        assert_eq!(options, PageOptions::default());
        assert_eq!(options.limit, 10);
        assert_eq!(options.page, 1);
        assert_eq!(options.offset(), 0);
    }

    #[test]
    fn test_offset_from_page_and_limit() {
        let options = PageOptions::parse(None, Some(10), Some(3), resolve).unwrap();
        assert_eq!(options.offset(), 20);
    }

    #[test]
    fn test_rejects_non_positive_limit() {
        assert!(matches!(
            PageOptions::parse(None, Some(0), None, resolve),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            PageOptions::parse(None, Some(-5), None, resolve),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_rejects_page_below_one() {
        assert!(matches!(
            PageOptions::parse(None, None, Some(0), resolve),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_clamps_large_limit() {
        let options = PageOptions::parse(None, Some(10_000), None, resolve).unwrap();
        assert_eq!(options.limit, MAX_PAGE_SIZE);
    }

    #[test]
    fn test_parses_sort_criteria() {
        let options =
            PageOptions::parse(Some("name:desc, created_at"), None, None, resolve).unwrap();
        assert_eq!(
            options.sort,
            vec![
                SortSpec {
                    field: "name",
                    direction: SortDirection::Desc
                },
                SortSpec {
                    field: "created_at",
                    direction: SortDirection::Asc
                },
            ]
        );
    }

    #[test]
    fn test_rejects_unknown_sort_field_and_direction() {
        assert!(matches!(
            PageOptions::parse(Some("password:asc"), None, None, resolve),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            PageOptions::parse(Some("name:sideways"), None, None, resolve),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(15, 10), 2);
        assert_eq!(total_pages(21, 10), 3);
    }

    #[test]
    fn test_page_metadata() {
        let options = PageOptions::parse(None, Some(10), Some(2), resolve).unwrap();
        let page = Page::new(vec![1, 2, 3, 4, 5], 15, &options);
        assert_eq!(page.page, 2);
        assert_eq!(page.limit, 10);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.total_results, 15);
        assert_eq!(page.results.len(), 5);
    }

    #[test]
    fn test_page_serializes_camel_case() {
        let page = Page::new(Vec::<i32>::new(), 0, &PageOptions::default());
        let json = serde_json::to_value(&page).unwrap();
        assert!(json.get("totalPages").is_some());
        assert!(json.get("totalResults").is_some());
        assert!(json.get("results").is_some());
    }
}
