use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::errors::ProductError;
use super::model::Product;

/// Fields a product listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Name,
    Category,
    UnitPrice,
    StockQuantity,
    ExpirationDate,
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortField::Name => write!(f, "name"),
            SortField::Category => write!(f, "category"),
            SortField::UnitPrice => write!(f, "unitPrice"),
            SortField::StockQuantity => write!(f, "stockQuantity"),
            SortField::ExpirationDate => write!(f, "expirationDate"),
        }
    }
}

impl std::str::FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortField::Name),
            "category" => Ok(SortField::Category),
            "unitPrice" => Ok(SortField::UnitPrice),
            "stockQuantity" => Ok(SortField::StockQuantity),
            "expirationDate" => Ok(SortField::ExpirationDate),
            _ => Err(format!("Unsupported sort field: {}", s)),
        }
    }
}

impl SortField {
    /// Ascending comparison for this field.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortField::Category => a.category.to_lowercase().cmp(&b.category.to_lowercase()),
            SortField::UnitPrice => a.unit_price.total_cmp(&b.unit_price),
            SortField::StockQuantity => a.stock_quantity.cmp(&b.stock_quantity),
            // Missing dates sort as the latest possible date.
            SortField::ExpirationDate => a
                .expiration_date
                .unwrap_or(NaiveDate::MAX)
                .cmp(&b.expiration_date.unwrap_or(NaiveDate::MAX)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Only `desc` (any case) is descending. Anything else, including
    /// unknown words, falls back to ascending.
    pub fn parse_lenient(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("desc") => SortDirection::Desc,
            _ => SortDirection::Asc,
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortKey {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Parses a `(sortBy, direction)` query pair. `param` names the sortBy
    /// parameter in any reported violation.
    pub fn parse(param: &str, field: &str, direction: Option<&str>) -> Result<Self, ProductError> {
        let field = field
            .trim()
            .parse::<SortField>()
            .map_err(|message| ProductError::validation(param, message))?;
        Ok(Self::new(field, SortDirection::parse_lenient(direction)))
    }

    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        let ordering = self.field.compare(a, b);
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// A primary ordering with an optional tie-breaker. Each key carries its own
/// direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub primary: SortKey,
    pub secondary: Option<SortKey>,
}

impl SortSpec {
    pub fn new(primary: SortKey, secondary: Option<SortKey>) -> Self {
        Self { primary, secondary }
    }

    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        let ordering = self.primary.compare(a, b);
        match self.secondary {
            Some(secondary) => ordering.then_with(|| secondary.compare(a, b)),
            None => ordering,
        }
    }

    /// Stable: records that compare equal keep their incoming order.
    pub fn apply(&self, mut products: Vec<Product>) -> Vec<Product> {
        products.sort_by(|a, b| self.compare(a, b));
        products
    }
}
