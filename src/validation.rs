//! Form Validation
//!
//! Field patterns checked on every change, and the required-field check run before saving.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::models::FoodDraft;

static CALORIES_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("calories pattern is valid"));

static PRICE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(\.[0-9]{1,2})?$").expect("price pattern is valid"));

/// Rejected form input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("calories must be a non-negative integer, got {0:?}")]
    InvalidCalories(String),
    #[error("price must be a non-negative number with up to 2 decimals, got {0:?}")]
    InvalidPrice(String),
    #[error("all fields are required")]
    MissingFields,
}

impl ValidationError {
    /// Text shown in the error dialog
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidCalories(_) => "Las calorías deben ser un número entero positivo",
            Self::InvalidPrice(_) => "El precio debe ser un número positivo con hasta 2 decimales",
            Self::MissingFields => "Todos los campos deben ser completados",
        }
    }
}

/// Form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Description,
    Price,
    Calories,
}

/// Check a single keystroke's value. Empty values always pass so fields can be cleared.
pub fn check_field(field: Field, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    match field {
        Field::Calories if !CALORIES_PATTERN.is_match(value) => {
            Err(ValidationError::InvalidCalories(value.to_string()))
        }
        Field::Price if !PRICE_PATTERN.is_match(value) => {
            Err(ValidationError::InvalidPrice(value.to_string()))
        }
        _ => Ok(()),
    }
}

/// All four fields must be filled before a save is sent.
pub fn check_complete(draft: &FoodDraft) -> Result<(), ValidationError> {
    let fields = [&draft.name, &draft.description, &draft.price, &draft.calories];
    if fields.iter().any(|value| value.is_empty()) {
        return Err(ValidationError::MissingFields);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calories_accepts_digits() {
        for value in ["0", "5", "500", "0012", "123456789"] {
            assert_eq!(check_field(Field::Calories, value), Ok(()), "{value}");
        }
    }

    #[test]
    fn test_calories_rejects_non_digits() {
        for value in ["-5", "5.0", "abc", "12a", " 12", "1e3", "٣"] {
            assert!(
                matches!(check_field(Field::Calories, value), Err(ValidationError::InvalidCalories(_))),
                "{value}"
            );
        }
    }

    #[test]
    fn test_price_patterns() {
        for value in ["10", "10.5", "10.55", "0.01"] {
            assert_eq!(check_field(Field::Price, value), Ok(()), "{value}");
        }
        for value in ["10.555", "-5", "abc", "10.", ".5", "1,5"] {
            assert!(
                matches!(check_field(Field::Price, value), Err(ValidationError::InvalidPrice(_))),
                "{value}"
            );
        }
    }

    #[test]
    fn test_empty_and_free_text_fields_pass() {
        assert_eq!(check_field(Field::Price, ""), Ok(()));
        assert_eq!(check_field(Field::Calories, ""), Ok(()));
        assert_eq!(check_field(Field::Name, "Pizza 4 quesos!"), Ok(()));
        assert_eq!(check_field(Field::Description, "-5"), Ok(()));
    }

    #[test]
    fn test_check_complete() {
        let mut draft = FoodDraft {
            name: "Pizza".to_string(),
            description: "Queso".to_string(),
            price: "10".to_string(),
            calories: "500".to_string(),
        };
        assert_eq!(check_complete(&draft), Ok(()));

        draft.description = "   ".to_string();
        assert_eq!(check_complete(&draft), Ok(()));

        draft.description = String::new();
        assert_eq!(check_complete(&draft), Err(ValidationError::MissingFields));
        assert_eq!(check_complete(&FoodDraft::default()), Err(ValidationError::MissingFields));
    }
}
