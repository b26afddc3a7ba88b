use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;
use validator::Validate;

use crate::error::{ProductError, ProductResult};

/// A catalog product.
///
/// Only [`Product::new`] and [`Product::revise`] produce values visible to callers, so every
/// instance has a non-empty name and a strictly positive price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    id: Uuid,
    name: String,
    price: f64,
    created_at: DateTime<Utc>,
}

impl Product {
    /// Build a new product with a fresh id and creation timestamp
    pub fn new(name: impl Into<String>, price: f64) -> ProductResult<Self> {
        let name = name.into();
        Self::check(&name, price)?;

        Ok(Self {
            id: Uuid::now_v7(),
            name,
            price,
            // timestamptz keeps microseconds
            created_at: Utc::now().trunc_subsecs(6),
        })
    }

    /// Replace name and price, keeping identity and creation time
    pub fn revise(self, name: impl Into<String>, price: f64) -> ProductResult<Self> {
        let name = name.into();
        Self::check(&name, price)?;

        Ok(Self {
            name,
            price,
            ..self
        })
    }

    /// Rehydrate a stored row; storage only ever holds validated products
    pub(crate) fn from_storage(
        id: Uuid,
        name: String,
        price: f64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            price,
            created_at,
        }
    }

    fn check(name: &str, price: f64) -> ProductResult<()> {
        if name.is_empty() {
            return Err(ProductError::Validation("name is required".to_string()));
        }
        // Written so that NaN is rejected too
        if !(price > 0.0) {
            return Err(ProductError::Validation(
                "price must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Request body for create and update
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProductInput {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub price: f64,
}

/// Query string of `GET /products`.
///
/// Values are kept as raw strings so that garbage such as `page=abc` degrades to `0`
/// instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListProductsQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub sort: Option<String>,
}

impl ListProductsQuery {
    pub fn page(&self) -> u64 {
        lenient_u64(self.page.as_deref())
    }

    pub fn limit(&self) -> u64 {
        lenient_u64(self.limit.as_deref())
    }

    pub fn sort(&self) -> ProductSort {
        self.sort.as_deref().map(ProductSort::parse).unwrap_or_default()
    }
}

fn lenient_u64(raw: Option<&str>) -> u64 {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(0)
}

/// Window of a listing. `0` leaves the corresponding side unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
}

impl Pagination {
    pub fn new(page: u64, limit: u64) -> Self {
        Self { page, limit }
    }

    /// Rows to skip: `(page - 1) * limit` when both are set, otherwise none
    pub fn offset(&self) -> u64 {
        if self.page > 0 && self.limit > 0 {
            (self.page - 1).saturating_mul(self.limit)
        } else {
            0
        }
    }

    /// Maximum number of rows, `None` for all remaining
    pub fn take(&self) -> Option<u64> {
        (self.limit > 0).then_some(self.limit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SortField {
    Name,
    Price,
    #[default]
    CreatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Listing order. Ties are always broken by id ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProductSort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl ProductSort {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Parse a `sort` query value.
    ///
    /// Accepted forms: `field`, `-field`, `field:asc|desc`, and a bare `asc`/`desc` which
    /// orders by creation time. Anything else yields the default order.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return Self::default();
        }

        if let Ok(direction) = raw.parse::<SortDirection>() {
            return Self::new(SortField::CreatedAt, direction);
        }

        if let Some(field) = raw.strip_prefix('-') {
            return field
                .parse()
                .map(|field| Self::new(field, SortDirection::Desc))
                .unwrap_or_default();
        }

        match raw.split_once(':') {
            Some((field, direction)) => match (field.parse(), direction.parse()) {
                (Ok(field), Ok(direction)) => Self::new(field, direction),
                _ => Self::default(),
            },
            None => raw
                .parse()
                .map(|field| Self::new(field, SortDirection::Asc))
                .unwrap_or_default(),
        }
    }
}
