use chrono::{DateTime, NaiveDate, Utc};
use poem_openapi::Object;

use business::domain::errors::FieldViolation;
use business::domain::product::errors::ProductError;
use business::domain::product::filter::ProductFilter;
use business::domain::product::model::{Product, ProductInput};
use business::domain::product::sort::{SortKey, SortSpec};
use business::domain::shared::pagination::Page;

/// Payload for both create and update.
///
/// Every field is optional on the wire so that missing or `null` values are
/// reported as field violations instead of a payload parse failure.
#[derive(Debug, Clone, Default, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductRequest {
    /// Product name (not blank, at most 120 characters)
    pub name: Option<String>,
    /// Product category (not blank)
    pub category: Option<String>,
    /// Unit price (zero or positive)
    pub unit_price: Option<f64>,
    /// Units in stock (zero or positive)
    pub stock_quantity: Option<i32>,
    /// Expiration date, today or later
    #[oai(skip_serializing_if_is_none)]
    pub expiration_date: Option<NaiveDate>,
}

impl ProductRequest {
    /// Missing text fields become blank and are left to domain validation.
    /// Missing numbers are rejected here, together with any blank text field.
    pub fn into_input(self) -> Result<ProductInput, ProductError> {
        let mut missing = Vec::new();
        if self.unit_price.is_none() {
            missing.push(FieldViolation::new(
                "unitPrice",
                "Product unit price is required",
            ));
        }
        if self.stock_quantity.is_none() {
            missing.push(FieldViolation::new(
                "stockQuantity",
                "Product stock quantity is required",
            ));
        }

        let input = ProductInput {
            name: self.name.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            unit_price: self.unit_price.unwrap_or_default(),
            stock_quantity: self.stock_quantity.unwrap_or_default(),
            expiration_date: self.expiration_date,
        };

        if missing.is_empty() {
            return Ok(input);
        }

        // Placeholder numbers and the earliest date only leave the text rules to fire.
        if let Err(ProductError::Validation(violations)) = input.validate(NaiveDate::MIN) {
            missing.extend(violations);
        }
        Err(ProductError::Validation(missing))
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    /// Product identifier
    pub id: u64,
    pub name: String,
    pub category: String,
    pub unit_price: f64,
    pub stock_quantity: i32,
    #[oai(skip_serializing_if_is_none)]
    pub expiration_date: Option<NaiveDate>,
    /// Creation timestamp
    pub creation_date: DateTime<Utc>,
    /// Last update timestamp
    pub last_updated_date: DateTime<Utc>,
    /// True when stock quantity is zero
    pub out_of_stock: bool,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        let out_of_stock = product.is_out_of_stock();
        Self {
            id: product.id.value(),
            name: product.name,
            category: product.category,
            unit_price: product.unit_price,
            stock_quantity: product.stock_quantity,
            expiration_date: product.expiration_date,
            creation_date: product.creation_date,
            last_updated_date: product.last_updated_date,
            out_of_stock,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductPageResponse {
    /// Products on the requested page
    pub content: Vec<ProductResponse>,
    /// Zero-based page index as requested
    pub page: u64,
    /// Page size as requested
    pub size: u64,
    /// Products considered before slicing
    pub total_elements: u64,
    pub total_pages: u64,
}

impl From<Page<Product>> for ProductPageResponse {
    fn from(page: Page<Product>) -> Self {
        let page = page.map(ProductResponse::from);
        Self {
            content: page.items,
            page: page.page as u64,
            size: page.size as u64,
            total_elements: page.total_count as u64,
            total_pages: page.total_pages as u64,
        }
    }
}

/// Builds a listing filter from query parameters. Category values may repeat
/// or be comma-separated; blank entries are dropped.
pub fn product_filter(
    name: Option<String>,
    categories: Option<Vec<String>>,
    in_stock: Option<bool>,
) -> ProductFilter {
    let categories = categories.map(|values| {
        values
            .iter()
            .flat_map(|value| value.split(','))
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(String::from)
            .collect::<Vec<_>>()
    });

    ProductFilter {
        name,
        categories,
        in_stock,
    }
}

/// Raw `sortBy1/direction1/sortBy2/direction2` query parameters.
#[derive(Debug, Default)]
pub struct SortQuery {
    pub sort_by_1: Option<String>,
    pub direction_1: Option<String>,
    pub sort_by_2: Option<String>,
    pub direction_2: Option<String>,
}

impl SortQuery {
    /// `None` when no primary field is given. A secondary field without a
    /// primary one is rejected.
    pub fn into_sort_spec(self) -> Result<Option<SortSpec>, ProductError> {
        let sort_by_1 = non_blank(self.sort_by_1);
        let sort_by_2 = non_blank(self.sort_by_2);

        let Some(primary_field) = sort_by_1 else {
            return match sort_by_2 {
                Some(_) => Err(ProductError::validation(
                    "sortBy2",
                    "sortBy2 requires sortBy1",
                )),
                None => Ok(None),
            };
        };

        let primary = SortKey::parse("sortBy1", &primary_field, self.direction_1.as_deref())?;
        let secondary = sort_by_2
            .map(|field| SortKey::parse("sortBy2", &field, self.direction_2.as_deref()))
            .transpose()?;

        Ok(Some(SortSpec::new(primary, secondary)))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::product::sort::{SortDirection, SortField};

    fn complete_request() -> ProductRequest {
        ProductRequest {
            name: Some("Milk".to_string()),
            category: Some("Dairy".to_string()),
            unit_price: Some(1.0),
            stock_quantity: Some(4),
            expiration_date: None,
        }
    }

    fn violation_map(result: Result<ProductInput, ProductError>) -> Vec<(String, String)> {
        match result {
            Err(ProductError::Validation(violations)) => violations
                .into_iter()
                .map(|v| (v.field, v.message))
                .collect(),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn should_convert_complete_request_into_input() {
        let input = complete_request().into_input().unwrap();

        assert_eq!(input.name, "Milk");
        assert_eq!(input.unit_price, 1.0);
        assert_eq!(input.stock_quantity, 4);
    }

    #[test]
    fn should_report_missing_stock_quantity() {
        let request = ProductRequest {
            stock_quantity: None,
            ..complete_request()
        };

        assert_eq!(
            violation_map(request.into_input()),
            vec![(
                "stockQuantity".to_string(),
                "Product stock quantity is required".to_string()
            )]
        );
    }

    #[test]
    fn should_report_every_missing_field_when_body_is_empty() {
        let fields: Vec<String> = violation_map(ProductRequest::default().into_input())
            .into_iter()
            .map(|(field, _)| field)
            .collect();

        assert_eq!(fields, vec!["unitPrice", "stockQuantity", "name", "category"]);
    }

    #[test]
    fn should_leave_missing_name_to_domain_validation_when_numbers_are_present() {
        let request = ProductRequest {
            name: None,
            ..complete_request()
        };

        let input = request.into_input().unwrap();

        assert_eq!(input.name, "");
    }

    #[test]
    fn should_split_comma_separated_categories() {
        let filter = product_filter(
            None,
            Some(vec!["Dairy, Bakery".to_string(), " ".to_string(), "Fruit".to_string()]),
            Some(true),
        );

        assert_eq!(
            filter.categories,
            Some(vec![
                "Dairy".to_string(),
                "Bakery".to_string(),
                "Fruit".to_string()
            ])
        );
        assert_eq!(filter.in_stock, Some(true));
    }

    #[test]
    fn should_build_two_key_sort_spec() {
        let query = SortQuery {
            sort_by_1: Some("category".to_string()),
            direction_1: None,
            sort_by_2: Some("unitPrice".to_string()),
            direction_2: Some("DESC".to_string()),
        };

        let spec = query.into_sort_spec().unwrap().unwrap();

        assert_eq!(spec.primary, SortKey::new(SortField::Category, SortDirection::Asc));
        assert_eq!(
            spec.secondary,
            Some(SortKey::new(SortField::UnitPrice, SortDirection::Desc))
        );
    }

    #[test]
    fn should_return_no_sort_when_fields_are_blank() {
        let query = SortQuery {
            sort_by_1: Some("  ".to_string()),
            ..Default::default()
        };

        assert_eq!(query.into_sort_spec().unwrap(), None);
    }

    #[test]
    fn should_reject_secondary_without_primary() {
        let query = SortQuery {
            sort_by_2: Some("name".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            query.into_sort_spec(),
            Err(ProductError::Validation(_))
        ));
    }

    #[test]
    fn should_reject_unknown_sort_field() {
        let query = SortQuery {
            sort_by_1: Some("id".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            query.into_sort_spec(),
            Err(ProductError::Validation(v)) if v[0].field == "sortBy1"
        ));
    }
}
