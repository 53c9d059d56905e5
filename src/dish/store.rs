//! # Dish Store
//!
//! In-memory owner of every dish record.
//!
//! The store keeps dishes in insertion order together with the next id to
//! hand out. All state sits behind a single `RwLock`; writers hold the write
//! lock for the whole validate-then-apply sequence, so id assignment is atomic
//! and readers never see a half-applied write.
//!
//! Ids are never reused: the counter only moves forward, and only when a
//! create succeeds.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::errors::{DishError, DishResult};
use super::model::{validate_name, validate_price, Dish, DishChanges, DishId};

/// Starter menu the service boots with
const HOUSE_MENU: [(&str, f64); 3] = [
    ("Pizza Margherita", 15.99),
    ("Pasta Carbonara", 12.50),
    ("Ensalada César", 8.99),
];

#[derive(Debug)]
struct Menu {
    dishes: Vec<Dish>,
    next_id: DishId,
}

impl Menu {
    fn position(&self, id: DishId) -> DishResult<usize> {
        self.dishes
            .iter()
            .position(|d| d.id == id)
            .ok_or(DishError::NotFound(id))
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self {
            dishes: Vec::new(),
            next_id: 1,
        }
    }
}

/// Thread-safe in-memory dish collection
#[derive(Debug, Default)]
pub struct DishStore {
    menu: RwLock<Menu>,
}

impl DishStore {
    /// Create an empty store; the first dish gets id 1
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the house menu (ids 1..=3)
    pub fn with_house_menu() -> Self {
        let dishes: Vec<Dish> = HOUSE_MENU
            .iter()
            .zip(1..)
            .map(|(&(name, price), id)| Dish {
                id,
                name: name.to_string(),
                price,
            })
            .collect();
        debug_assert!(dishes
            .iter()
            .all(|d| validate_name(&d.name).is_ok() && validate_price(d.price).is_ok()));

        let next_id = dishes.len() as DishId + 1;
        Self {
            menu: RwLock::new(Menu { dishes, next_id }),
        }
    }

    // A panic while holding the lock cannot leave a torn dish behind because
    // validation runs before any mutation, so a poisoned lock is still usable.
    fn read(&self) -> RwLockReadGuard<'_, Menu> {
        self.menu.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Menu> {
        self.menu.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// All dishes in insertion order
    pub fn list_all(&self) -> Vec<Dish> {
        self.read().dishes.clone()
    }

    /// Exact-id lookup
    pub fn get(&self, id: DishId) -> DishResult<Dish> {
        let menu = self.read();
        let index = menu.position(id)?;
        Ok(menu.dishes[index].clone())
    }

    /// Validate and append a new dish, assigning the next id
    pub fn create(&self, name: impl Into<String>, price: f64) -> DishResult<Dish> {
        let name = name.into();
        validate_name(&name)?;
        validate_price(price)?;

        let mut menu = self.write();
        let dish = Dish {
            id: menu.next_id,
            name,
            price,
        };
        menu.next_id += 1;
        menu.dishes.push(dish.clone());
        Ok(dish)
    }

    /// Overwrite name and price of an existing dish
    ///
    /// Both fields must be supplied. The dish keeps its id and position.
    pub fn replace(&self, id: DishId, changes: DishChanges) -> DishResult<Dish> {
        let mut menu = self.write();
        let index = menu.position(id)?;
        let (name, price) = changes.into_complete()?;

        let dish = &mut menu.dishes[index];
        dish.name = name;
        dish.price = price;
        Ok(dish.clone())
    }

    /// Apply any supplied fields to an existing dish
    ///
    /// Every supplied field is validated before any is applied. An empty
    /// change set is a successful no-op.
    pub fn update_partial(&self, id: DishId, changes: DishChanges) -> DishResult<Dish> {
        let mut menu = self.write();
        let index = menu.position(id)?;
        changes.validate()?;

        let dish = &mut menu.dishes[index];
        if let Some(name) = changes.name {
            dish.name = name;
        }
        if let Some(price) = changes.price {
            dish.price = price;
        }
        Ok(dish.clone())
    }

    /// Remove a dish, returning it
    pub fn delete(&self, id: DishId) -> DishResult<Dish> {
        let mut menu = self.write();
        let index = menu.position(id)?;
        Ok(menu.dishes.remove(index))
    }

    /// Number of dishes currently stored
    pub fn len(&self) -> usize {
        self.read().dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().dishes.is_empty()
    }

    /// Id the next successful create will receive
    pub fn next_id(&self) -> DishId {
        self.read().next_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dish::errors::{DishField, Violation};

    fn ids(store: &DishStore) -> Vec<DishId> {
        store.list_all().iter().map(|d| d.id).collect()
    }

    #[test]
    fn test_round_trip() {
        let store = DishStore::new();
        let created = store.create("Tacos al Pastor", 9.99).unwrap();

        let fetched = store.get(created.id).unwrap();
        assert_eq!(fetched.name, "Tacos al Pastor");
        assert_eq!(fetched.price, 9.99);
        assert_eq!(fetched.id, created.id);
    }

    #[test]
    fn test_ids_start_at_one() {
        let store = DishStore::new();
        assert_eq!(store.create("Tostada", 3.0).unwrap().id, 1);
        assert_eq!(store.create("Gordita", 3.5).unwrap().id, 2);
    }

    #[test]
    fn test_ids_never_reused_after_delete() {
        let store = DishStore::new();
        let a = store.create("A", 1.0).unwrap();
        let b = store.create("B", 1.0).unwrap();

        store.delete(b.id).unwrap();
        store.delete(a.id).unwrap();
        assert!(store.is_empty());

        let c = store.create("C", 1.0).unwrap();
        assert!(c.id > b.id);
        assert_eq!(c.id, 3);
    }

    #[test]
    fn test_get_missing() {
        let store = DishStore::new();
        assert_eq!(store.get(42), Err(DishError::NotFound(42)));
    }

    #[test]
    fn test_create_rejects_empty_name() {
        let store = DishStore::new();
        let result = store.create("", 5.00);

        assert_eq!(
            result,
            Err(DishError::InvalidInput {
                field: DishField::Name,
                violation: Violation::Empty,
            })
        );
        assert!(store.is_empty());
        assert_eq!(store.next_id(), 1);
    }

    #[test]
    fn test_create_rejects_non_positive_price() {
        let store = DishStore::new();
        let result = store.create("Soup", -1.00);

        assert_eq!(
            result,
            Err(DishError::InvalidInput {
                field: DishField::Price,
                violation: Violation::NotPositive,
            })
        );
        assert!(store.is_empty());
        assert_eq!(store.next_id(), 1);
    }

    #[test]
    fn test_failed_create_does_not_advance_counter() {
        let store = DishStore::new();
        store.create("Churros", 4.0).unwrap();
        assert!(store.create("Churros", 0.0).is_err());

        let next = store.create("Flan", 4.0).unwrap();
        assert_eq!(next.id, 2);
    }

    #[test]
    fn test_replace_keeps_position() {
        let store = DishStore::new();
        let first = store.create("First", 1.0).unwrap();
        let second = store.create("Second", 2.0).unwrap();
        let third = store.create("Third", 3.0).unwrap();

        let replaced = store
            .replace(second.id, DishChanges::new().name("New Name").price(12.50))
            .unwrap();
        assert_eq!(replaced.id, second.id);
        assert_eq!(replaced.name, "New Name");
        assert_eq!(replaced.price, 12.50);

        assert_eq!(ids(&store), vec![first.id, second.id, third.id]);
        assert_eq!(store.list_all()[1], replaced);
        assert_eq!(store.get(first.id).unwrap(), first);
        assert_eq!(store.get(third.id).unwrap(), third);
    }

    #[test]
    fn test_replace_requires_both_fields() {
        let store = DishStore::new();
        let dish = store.create("Mole", 11.0).unwrap();

        let result = store.replace(dish.id, DishChanges::new().name("Mole Negro"));
        assert_eq!(
            result,
            Err(DishError::InvalidInput {
                field: DishField::Price,
                violation: Violation::Missing,
            })
        );
        assert_eq!(store.get(dish.id).unwrap(), dish);
    }

    #[test]
    fn test_replace_missing_dish_reports_not_found_first() {
        let store = DishStore::new();
        // Invalid payload, but the absent target wins
        let result = store.replace(9, DishChanges::new());
        assert_eq!(result, Err(DishError::NotFound(9)));
    }

    #[test]
    fn test_replace_rejects_invalid_values() {
        let store = DishStore::new();
        let dish = store.create("Pozole", 10.0).unwrap();

        let result = store.replace(dish.id, DishChanges::new().name("").price(10.0));
        assert!(result.unwrap_err().is_invalid_input());

        let result = store.replace(dish.id, DishChanges::new().name("Pozole").price(0.0));
        assert!(result.unwrap_err().is_invalid_input());

        assert_eq!(store.get(dish.id).unwrap(), dish);
    }

    #[test]
    fn test_update_partial_applies_supplied_fields() {
        let store = DishStore::new();
        let dish = store.create("Quesadilla", 6.0).unwrap();

        let updated = store
            .update_partial(dish.id, DishChanges::new().price(6.5))
            .unwrap();
        assert_eq!(updated.name, "Quesadilla");
        assert_eq!(updated.price, 6.5);

        let updated = store
            .update_partial(dish.id, DishChanges::new().name("Quesadilla de Flor"))
            .unwrap();
        assert_eq!(updated.name, "Quesadilla de Flor");
        assert_eq!(updated.price, 6.5);
    }

    #[test]
    fn test_update_partial_empty_is_noop() {
        let store = DishStore::new();
        let dish = store.create("Tamal", 2.25).unwrap();

        let result = store.update_partial(dish.id, DishChanges::new()).unwrap();
        assert_eq!(result, dish);
        assert_eq!(store.get(dish.id).unwrap(), dish);
    }

    #[test]
    fn test_update_partial_is_all_or_nothing() {
        let store = DishStore::new();
        let dish = store.create("Enchiladas", 9.0).unwrap();

        // Valid name, invalid price: nothing may be applied
        let result = store.update_partial(dish.id, DishChanges::new().name("Enmoladas").price(-3.0));
        assert!(result.unwrap_err().is_invalid_input());
        assert_eq!(store.get(dish.id).unwrap(), dish);
    }

    #[test]
    fn test_update_partial_missing_dish() {
        let store = DishStore::new();
        let result = store.update_partial(5, DishChanges::new().price(1.0));
        assert_eq!(result, Err(DishError::NotFound(5)));
    }

    #[test]
    fn test_delete_twice() {
        let store = DishStore::new();
        let dish = store.create("Pambazo", 5.0).unwrap();

        assert_eq!(store.delete(dish.id).unwrap(), dish);
        assert_eq!(store.delete(dish.id), Err(DishError::NotFound(dish.id)));
    }

    #[test]
    fn test_delete_preserves_order_of_remaining() {
        let store = DishStore::new();
        for name in ["A", "B", "C", "D"] {
            store.create(name, 1.0).unwrap();
        }
        store.delete(2).unwrap();
        assert_eq!(ids(&store), vec![1, 3, 4]);
    }

    #[test]
    fn test_house_menu() {
        let store = DishStore::with_house_menu();
        let dishes = store.list_all();

        assert_eq!(dishes.len(), 3);
        assert_eq!(dishes[0].name, "Pizza Margherita");
        assert_eq!(dishes[0].price, 15.99);
        assert_eq!(dishes[1].name, "Pasta Carbonara");
        assert_eq!(dishes[2].name, "Ensalada César");
        assert_eq!(ids(&store), vec![1, 2, 3]);
        assert_eq!(store.next_id(), 4);
    }

    #[test]
    fn test_house_menu_satisfies_field_rules() {
        for (name, price) in HOUSE_MENU {
            assert_eq!(validate_name(name), Ok(()), "house dish {:?}", name);
            assert_eq!(validate_price(price), Ok(()), "house dish {:?}", name);
        }
    }
}
