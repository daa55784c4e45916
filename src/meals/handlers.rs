use axum::{
    extract::State,
    http::HeaderMap,
    routing::{delete, get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{db::AppState, error::AppError};

use super::dto::NewMeal;
use super::repo::{self, Meal};

// --- public routers ---

pub fn read_router() -> Router<AppState> {
    Router::new()
        .route("/getMeal", get(get_meal))
        .route("/getMeals", get(get_meals))
}

pub fn write_router() -> Router<AppState> {
    Router::new()
        .route("/addMeal", post(add_meal))
        .route("/deleteMeal", delete(delete_meal))
}

// --- handlers ---

fn meal_id(headers: &HeaderMap) -> Result<i64, AppError> {
    headers
        .get("mealid")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<i64>().ok())
        .ok_or_else(|| AppError::BadRequest("provide mealid header key/val".into()))
}

#[instrument(skip(state, headers))]
pub async fn get_meal(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Meal>, AppError> {
    let id = meal_id(&headers)?;
    match repo::find_by_id(&state.db, id).await? {
        Some(meal) => Ok(Json(meal)),
        None => {
            warn!(%id, "meal not found");
            Err(AppError::NotFound(id))
        }
    }
}

#[instrument(skip(state))]
pub async fn get_meals(State(state): State<AppState>) -> Result<Json<Vec<Meal>>, AppError> {
    let meals = repo::find_all(&state.db).await?;
    Ok(Json(meals))
}

#[instrument(skip(state, payload))]
pub async fn add_meal(
    State(state): State<AppState>,
    Json(payload): Json<NewMeal>,
) -> Result<String, AppError> {
    let id = repo::insert(&state.db, &payload).await?;
    info!(%id, "meal inserted");
    Ok(format!("inserted meal! id = {id}"))
}

#[instrument(skip(state, headers))]
pub async fn delete_meal(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<&'static str, AppError> {
    let id = meal_id(&headers)?;
    repo::delete_by_id(&state.db, id).await?;
    info!(%id, "meal deleted");
    Ok("success")
}
