//! # Dish Errors
//!
//! Failures reported by the dish store.

use std::fmt;

use thiserror::Error;

use super::model::DishId;

/// Result type for store operations
pub type DishResult<T> = Result<T, DishError>;

/// A dish field that can carry a semantic violation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DishField {
    Name,
    Price,
}

impl DishField {
    pub fn as_str(&self) -> &'static str {
        match self {
            DishField::Name => "name",
            DishField::Price => "price",
        }
    }
}

impl fmt::Display for DishField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The rule a supplied (or missing) field broke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// Field is required for this operation but was not supplied
    Missing,
    /// Text field is empty
    Empty,
    /// Text field is longer than `max` characters
    TooLong { max: usize },
    /// Number is zero or negative
    NotPositive,
    /// Number is NaN or infinite
    NotFinite,
}

impl Violation {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            Violation::Missing => "missing",
            Violation::Empty => "empty",
            Violation::TooLong { .. } => "too_long",
            Violation::NotPositive => "not_positive",
            Violation::NotFinite => "not_finite",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Missing => write!(f, "is required"),
            Violation::Empty => write!(f, "must not be empty"),
            Violation::TooLong { max } => write!(f, "must be at most {} characters", max),
            Violation::NotPositive => write!(f, "must be greater than 0"),
            Violation::NotFinite => write!(f, "must be a finite number"),
        }
    }
}

/// Dish store errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DishError {
    /// No dish carries the requested id
    #[error("Dish {0} not found")]
    NotFound(DishId),

    /// A field violates a semantic constraint
    #[error("Invalid {field}: {field} {violation}")]
    InvalidInput { field: DishField, violation: Violation },
}

impl DishError {
    pub(crate) fn invalid(field: DishField, violation: Violation) -> Self {
        DishError::InvalidInput { field, violation }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DishError::NotFound(_))
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, DishError::InvalidInput { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(DishError::NotFound(7).to_string(), "Dish 7 not found");
        assert_eq!(
            DishError::invalid(DishField::Price, Violation::NotPositive).to_string(),
            "Invalid price: price must be greater than 0"
        );
        assert_eq!(
            DishError::invalid(DishField::Name, Violation::TooLong { max: 100 }).to_string(),
            "Invalid name: name must be at most 100 characters"
        );
    }

    #[test]
    fn test_violation_codes() {
        assert_eq!(Violation::Missing.code(), "missing");
        assert_eq!(Violation::Empty.code(), "empty");
        assert_eq!(Violation::TooLong { max: 3 }.code(), "too_long");
        assert_eq!(Violation::NotPositive.code(), "not_positive");
        assert_eq!(Violation::NotFinite.code(), "not_finite");
    }

    #[test]
    fn test_error_kind_predicates() {
        assert!(DishError::NotFound(1).is_not_found());
        assert!(!DishError::NotFound(1).is_invalid_input());
        assert!(DishError::invalid(DishField::Name, Violation::Empty).is_invalid_input());
    }
}
