//! Dish HTTP Routes
//!
//! Maps each CRUD route onto one store operation and renders the outcome.
//! No semantic validation happens here; the store owns every field rule.
//!
//! | Route | Store operation |
//! |-------|-----------------|
//! | `GET /dishes` | `list_all` |
//! | `POST /dishes` | `create` |
//! | `GET /dishes/:id` | `get` |
//! | `PUT /dishes/:id` | `replace` |
//! | `PATCH /dishes/:id` | `update_partial` |
//! | `DELETE /dishes/:id` | `delete` |

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use super::errors::{ApiError, ApiResult};
use crate::dish::{Dish, DishChanges, DishError, DishId, DishStore, NewDish};
use crate::observability::{log_event_with_fields, Event, Logger};

// ==================
// Shared State
// ==================

/// Dish state shared across handlers
pub struct DishState {
    pub store: Arc<DishStore>,
}

impl DishState {
    pub fn new(store: Arc<DishStore>) -> Self {
        Self { store }
    }
}

impl Default for DishState {
    fn default() -> Self {
        Self::new(Arc::new(DishStore::new()))
    }
}

// ==================
// Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ==================
// Dish Routes
// ==================

/// Create dish routes
pub fn dish_routes(state: Arc<DishState>) -> Router {
    Router::new()
        .route("/dishes", get(list_dishes_handler).post(create_dish_handler))
        .route(
            "/dishes/:id",
            get(get_dish_handler)
                .put(replace_dish_handler)
                .patch(update_dish_handler)
                .delete(delete_dish_handler),
        )
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

/// Log a refused operation and convert it for the response
fn rejected(operation: &str, id: Option<DishId>, err: DishError) -> ApiError {
    let id = id.map(|id| id.to_string()).unwrap_or_default();
    let reason = err.to_string();
    Logger::warn(
        Event::DishRejected.as_str(),
        &[("id", id.as_str()), ("operation", operation), ("reason", reason.as_str())],
    );
    ApiError::from(err)
}

fn log_dish(event: Event, dish: &Dish) {
    let id = dish.id.to_string();
    let price = dish.price.to_string();
    log_event_with_fields(
        event,
        &[("id", id.as_str()), ("name", dish.name.as_str()), ("price", price.as_str())],
    );
}

// ==================
// Handlers
// ==================

async fn list_dishes_handler(State(state): State<Arc<DishState>>) -> Json<Vec<Dish>> {
    Json(state.store.list_all())
}

async fn get_dish_handler(
    State(state): State<Arc<DishState>>,
    path: Result<Path<DishId>, PathRejection>,
) -> ApiResult<Json<Dish>> {
    let Path(id) = path?;
    let dish = state
        .store
        .get(id)
        .map_err(|e| rejected("get", Some(id), e))?;
    Ok(Json(dish))
}

async fn create_dish_handler(
    State(state): State<Arc<DishState>>,
    payload: Result<Json<NewDish>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Dish>)> {
    let Json(new_dish) = payload?;
    let dish = state
        .store
        .create(new_dish.name, new_dish.price)
        .map_err(|e| rejected("create", None, e))?;

    log_dish(Event::DishCreated, &dish);
    Ok((StatusCode::CREATED, Json(dish)))
}

async fn replace_dish_handler(
    State(state): State<Arc<DishState>>,
    path: Result<Path<DishId>, PathRejection>,
    payload: Result<Json<DishChanges>, JsonRejection>,
) -> ApiResult<Json<Dish>> {
    let Path(id) = path?;
    let Json(changes) = payload?;
    let dish = state
        .store
        .replace(id, changes)
        .map_err(|e| rejected("replace", Some(id), e))?;

    log_dish(Event::DishReplaced, &dish);
    Ok(Json(dish))
}

async fn update_dish_handler(
    State(state): State<Arc<DishState>>,
    path: Result<Path<DishId>, PathRejection>,
    payload: Result<Json<DishChanges>, JsonRejection>,
) -> ApiResult<Json<Dish>> {
    let Path(id) = path?;
    let Json(changes) = payload?;
    let dish = state
        .store
        .update_partial(id, changes)
        .map_err(|e| rejected("update", Some(id), e))?;

    log_dish(Event::DishUpdated, &dish);
    Ok(Json(dish))
}

async fn delete_dish_handler(
    State(state): State<Arc<DishState>>,
    path: Result<Path<DishId>, PathRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Path(id) = path?;
    let dish = state
        .store
        .delete(id)
        .map_err(|e| rejected("delete", Some(id), e))?;

    log_dish(Event::DishDeleted, &dish);
    Ok(Json(MessageResponse {
        message: format!("Dish '{}' deleted successfully", dish.name),
    }))
}
