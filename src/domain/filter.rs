//! Validated pagination, ordering and search parameters for list queries.

use std::str::FromStr;

use thiserror::Error;

/// Page size used when the caller does not request one (or requests zero).
pub const DEFAULT_LIMIT: i64 = 10;

/// Order-by key used when the caller leaves it empty.
pub const DEFAULT_ORDER_BY: &str = "createdAt";

/// Errors raised while validating raw filter parameters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("limit must not be negative, got {0}")]
    NegativeLimit(i64),
    #[error("offset must not be negative, got {0}")]
    NegativeOffset(i64),
    #[error("unsupported order by value `{0}`")]
    UnsupportedOrderBy(String),
}

/// Validated limit/offset pair. Both values are never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: i64,
    pub offset: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl Pagination {
    /// Validate raw values. A missing or zero limit falls back to [`DEFAULT_LIMIT`],
    /// so "all rows" cannot be requested with `limit = 0`.
    pub fn new(limit: Option<i64>, offset: Option<i64>) -> Result<Self, FilterError> {
        let limit = limit.unwrap_or(0);
        if limit < 0 {
            return Err(FilterError::NegativeLimit(limit));
        }

        let offset = offset.unwrap_or(0);
        if offset < 0 {
            return Err(FilterError::NegativeOffset(offset));
        }

        Ok(Self {
            limit: if limit == 0 { DEFAULT_LIMIT } else { limit },
            offset,
        })
    }
}

/// Sort keys accepted for comparisons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ComparisonOrder {
    #[default]
    CreatedAt,
}

impl FromStr for ComparisonOrder {
    type Err = FilterError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "createdAt" => Ok(Self::CreatedAt),
            other => Err(FilterError::UnsupportedOrderBy(other.to_string())),
        }
    }
}

/// Sort keys accepted for objects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ObjectOrder {
    #[default]
    CreatedAt,
    Name,
    Rating,
}

impl FromStr for ObjectOrder {
    type Err = FilterError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "createdAt" => Ok(Self::CreatedAt),
            "name" => Ok(Self::Name),
            "rating" => Ok(Self::Rating),
            other => Err(FilterError::UnsupportedOrderBy(other.to_string())),
        }
    }
}

fn parse_order<T>(raw: Option<&str>) -> Result<T, FilterError>
where
    T: FromStr<Err = FilterError>,
{
    match raw {
        None | Some("") => DEFAULT_ORDER_BY.parse(),
        Some(value) => value.parse(),
    }
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.filter(|value| !value.is_empty())
}

/// Validated query for listing comparisons.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonFilter {
    pub pagination: Pagination,
    pub order_by: ComparisonOrder,
}

impl ComparisonFilter {
    pub fn new(
        limit: Option<i64>,
        offset: Option<i64>,
        order_by: Option<&str>,
    ) -> Result<Self, FilterError> {
        Ok(Self {
            pagination: Pagination::new(limit, offset)?,
            order_by: parse_order(order_by)?,
        })
    }
}

/// Validated query for listing custom options. Results are ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomOptionFilter {
    pub pagination: Pagination,
    /// Substring matched against the option name.
    pub name: Option<String>,
}

impl CustomOptionFilter {
    pub fn new(
        limit: Option<i64>,
        offset: Option<i64>,
        name: Option<String>,
    ) -> Result<Self, FilterError> {
        Ok(Self {
            pagination: Pagination::new(limit, offset)?,
            name: non_empty(name),
        })
    }
}

/// Validated query for listing objects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectFilter {
    pub pagination: Pagination,
    pub order_by: ObjectOrder,
    /// Case-insensitive substring matched against the object name.
    pub name: Option<String>,
    /// Exact comparison identifier the objects must belong to.
    pub comparison_id: Option<String>,
}

impl ObjectFilter {
    pub fn new(
        limit: Option<i64>,
        offset: Option<i64>,
        order_by: Option<&str>,
        name: Option<String>,
        comparison_id: Option<String>,
    ) -> Result<Self, FilterError> {
        Ok(Self {
            pagination: Pagination::new(limit, offset)?,
            order_by: parse_order(order_by)?,
            name: non_empty(name),
            comparison_id: non_empty(comparison_id),
        })
    }
}
