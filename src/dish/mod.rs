//! # Dish Module
//!
//! The resource layer of the service: the dish record, the payloads that
//! create or change it, and the in-memory store that owns every dish.
//!
//! # Invariants
//!
//! - Ids are unique and strictly increasing, never reused after a delete
//! - Every stored dish has a non-empty name and a price > 0
//! - Validation precedes mutation; a rejected write changes nothing

pub mod errors;
pub mod model;
pub mod store;

pub use errors::{DishError, DishField, DishResult, Violation};
pub use model::{validate_name, validate_price, Dish, DishChanges, DishId, NewDish, MAX_NAME_LEN};
pub use store::DishStore;
