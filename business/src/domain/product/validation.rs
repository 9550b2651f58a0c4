use chrono::NaiveDate;

use crate::domain::errors::FieldViolation;

use super::errors::ProductError;
use super::model::ProductInput;

pub const NAME_MAX_CHARS: usize = 120;

impl ProductInput {
    /// Checks every field and reports all violations at once.
    ///
    /// `today` is the reference day for the expiration date rule.
    pub fn validate(&self, today: NaiveDate) -> Result<(), ProductError> {
        let mut violations = Vec::new();

        if self.name.trim().is_empty() {
            violations.push(FieldViolation::new(
                "name",
                "Product name must not be empty",
            ));
        } else if self.name.chars().count() > NAME_MAX_CHARS {
            violations.push(FieldViolation::new(
                "name",
                "Product name must not exceed 120 characters",
            ));
        }

        if self.category.trim().is_empty() {
            violations.push(FieldViolation::new(
                "category",
                "Product category is required",
            ));
        }

        if !self.unit_price.is_finite() || self.unit_price < 0.0 {
            violations.push(FieldViolation::new(
                "unitPrice",
                "Product unit price must be zero or positive",
            ));
        }

        if self.stock_quantity < 0 {
            violations.push(FieldViolation::new(
                "stockQuantity",
                "Product stock quantity cannot be negative",
            ));
        }

        if let Some(date) = self.expiration_date
            && date < today
        {
            violations.push(FieldViolation::new(
                "expirationDate",
                "Product expiration date must be today or in the future",
            ));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ProductError::Validation(violations))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
    }

    fn valid_input() -> ProductInput {
        ProductInput {
            name: "Greek Yogurt".to_string(),
            category: "Dairy".to_string(),
            unit_price: 1.25,
            stock_quantity: 12,
            expiration_date: Some(today()),
        }
    }

    fn violated_fields(result: Result<(), ProductError>) -> Vec<String> {
        match result {
            Err(ProductError::Validation(violations)) => {
                violations.into_iter().map(|v| v.field).collect()
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn should_accept_input_when_every_field_is_valid() {
        assert!(valid_input().validate(today()).is_ok());
    }

    #[test]
    fn should_accept_zero_price_and_zero_stock() {
        let input = ProductInput {
            unit_price: 0.0,
            stock_quantity: 0,
            expiration_date: None,
            ..valid_input()
        };

        assert!(input.validate(today()).is_ok());
    }

    #[test]
    fn should_reject_blank_name() {
        let input = ProductInput {
            name: "   ".to_string(),
            ..valid_input()
        };

        assert_eq!(violated_fields(input.validate(today())), vec!["name"]);
    }

    #[test]
    fn should_reject_name_longer_than_limit() {
        let at_limit = ProductInput {
            name: "a".repeat(NAME_MAX_CHARS),
            ..valid_input()
        };
        let over_limit = ProductInput {
            name: "a".repeat(NAME_MAX_CHARS + 1),
            ..valid_input()
        };

        assert!(at_limit.validate(today()).is_ok());
        assert_eq!(violated_fields(over_limit.validate(today())), vec!["name"]);
    }

    #[test]
    fn should_reject_expiration_date_in_the_past() {
        let input = ProductInput {
            expiration_date: today().pred_opt(),
            ..valid_input()
        };

        assert_eq!(
            violated_fields(input.validate(today())),
            vec!["expirationDate"]
        );
    }

    #[test]
    fn should_report_every_violation_when_several_fields_are_invalid() {
        let input = ProductInput {
            name: String::new(),
            category: " ".to_string(),
            unit_price: -0.5,
            stock_quantity: -1,
            expiration_date: None,
        };

        assert_eq!(
            violated_fields(input.validate(today())),
            vec!["name", "category", "unitPrice", "stockQuantity"]
        );
    }

    #[test]
    fn should_reject_non_finite_price() {
        let input = ProductInput {
            unit_price: f64::NAN,
            ..valid_input()
        };

        assert_eq!(violated_fields(input.validate(today())), vec!["unitPrice"]);
    }
}
