//! # Dish Model
//!
//! The dish record, the two inbound payload shapes, and the field rules that
//! every stored dish must satisfy.

use serde::{Deserialize, Serialize};

use super::errors::{DishError, DishField, DishResult, Violation};

/// Store-assigned dish identifier
pub type DishId = u64;

/// Maximum dish name length, in characters
pub const MAX_NAME_LEN: usize = 100;

/// A dish on the menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    /// Unique, never reused
    pub id: DishId,

    /// Display name (1..=100 characters)
    pub name: String,

    /// Price, always > 0
    pub price: f64,
}

/// Create payload: both fields required
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDish {
    pub name: String,
    pub price: f64,
}

/// Update payload: any subset of the mutable fields
///
/// Used as-is for partial updates. A full replace requires both fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DishChanges {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl DishChanges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// True when no field was supplied
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none()
    }

    /// Validate every supplied field, leaving absent ones alone
    pub fn validate(&self) -> DishResult<()> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        Ok(())
    }

    /// Require both fields and validate them, returning the full pair
    pub fn into_complete(self) -> DishResult<(String, f64)> {
        let name = self
            .name
            .ok_or_else(|| DishError::invalid(DishField::Name, Violation::Missing))?;
        validate_name(&name)?;

        let price = self
            .price
            .ok_or_else(|| DishError::invalid(DishField::Price, Violation::Missing))?;
        validate_price(price)?;

        Ok((name, price))
    }
}

/// Name must be non-empty and at most [`MAX_NAME_LEN`] characters
pub fn validate_name(name: &str) -> DishResult<()> {
    if name.is_empty() {
        return Err(DishError::invalid(DishField::Name, Violation::Empty));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(DishError::invalid(
            DishField::Name,
            Violation::TooLong { max: MAX_NAME_LEN },
        ));
    }
    Ok(())
}

/// Price must be a finite number strictly greater than zero
pub fn validate_price(price: f64) -> DishResult<()> {
    if !price.is_finite() {
        return Err(DishError::invalid(DishField::Price, Violation::NotFinite));
    }
    if price <= 0.0 {
        return Err(DishError::invalid(DishField::Price, Violation::NotPositive));
    }
    Ok(())
}
