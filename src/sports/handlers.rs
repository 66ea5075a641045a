use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::{error, info, instrument};

use crate::{
    error::{ApiError, StatusMessage},
    state::AppState,
};

use super::dto::{CreateSportRequest, Sport, UpdateSportRequest};
use super::repo;

pub fn sport_routes() -> Router<AppState> {
    Router::new()
        .route("/sports", get(list_sports).post(create_sport))
        .route(
            "/sports/:sport",
            get(get_sport).put(update_sport).delete(delete_sport),
        )
}

#[utoipa::path(
    get,
    path = "/sports",
    tag = "sports",
    responses(
        (status = 200, description = "All sports with decoded food lists", body = [Sport]),
        (status = 500, description = "Store failure or malformed stored data", body = StatusMessage),
    )
)]
#[instrument(skip(state))]
pub async fn list_sports(State(state): State<AppState>) -> Result<Json<Vec<Sport>>, ApiError> {
    let rows = repo::list_all(&state.db).await.map_err(|e| {
        error!(error = %e, "list sports failed");
        ApiError::Internal("Error retrieving sports data".into())
    })?;

    let records = rows
        .into_iter()
        .map(|row| row.into_record())
        .collect::<anyhow::Result<Vec<_>>>()
        .map_err(|e| {
            error!(error = %e, "stored food list is malformed");
            ApiError::Internal("Error retrieving sports data".into())
        })?;

    Ok(Json(records))
}

#[utoipa::path(
    get,
    path = "/sports/{sport}",
    tag = "sports",
    params(("sport" = String, Path, description = "Sport name, matched exactly")),
    responses(
        (status = 200, description = "The matching sport", body = Sport),
        (status = 404, description = "Sport not found", body = StatusMessage),
        (status = 500, description = "Store failure or malformed stored data", body = StatusMessage),
    )
)]
#[instrument(skip(state))]
pub async fn get_sport(
    State(state): State<AppState>,
    Path(sport): Path<String>,
) -> Result<Json<Sport>, ApiError> {
    let row = repo::find_by_name(&state.db, &sport)
        .await
        .map_err(|e| {
            error!(error = %e, %sport, "get sport failed");
            ApiError::Internal("Error retrieving sport data".into())
        })?
        .ok_or_else(|| ApiError::NotFound("Sport not found".into()))?;

    let record = row.into_record().map_err(|e| {
        error!(error = %e, %sport, "stored food list is malformed");
        ApiError::Internal("Error retrieving sport data".into())
    })?;

    Ok(Json(record))
}

#[utoipa::path(
    post,
    path = "/sports",
    tag = "sports",
    request_body = CreateSportRequest,
    responses(
        (status = 200, description = "Sport created", body = StatusMessage),
        (status = 500, description = "Store failure, including duplicate names", body = StatusMessage),
    )
)]
#[instrument(skip(state, payload))]
pub async fn create_sport(
    State(state): State<AppState>,
    Json(payload): Json<CreateSportRequest>,
) -> Result<Json<StatusMessage>, ApiError> {
    let recommended = repo::encode_foods(&payload.recommended_foods)
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    let avoid =
        repo::encode_foods(&payload.avoid_foods).map_err(|e| ApiError::Internal(e.to_string()))?;

    // Duplicate names are rejected by the store's primary key; its error
    // text goes back to the client as-is.
    repo::insert(&state.db, &payload.sport, &recommended, &avoid)
        .await
        .map_err(|e| {
            error!(error = %e, sport = %payload.sport, "create sport failed");
            ApiError::Internal(e.to_string())
        })?;

    info!(sport = %payload.sport, "sport created");
    Ok(Json(StatusMessage::ok("Sport data created successfully")))
}

#[utoipa::path(
    put,
    path = "/sports/{sport}",
    tag = "sports",
    params(("sport" = String, Path, description = "Sport name, matched exactly")),
    request_body = UpdateSportRequest,
    responses(
        (status = 200, description = "Both food lists replaced", body = StatusMessage),
        (status = 404, description = "Sport not found", body = StatusMessage),
        (status = 500, description = "Store failure", body = StatusMessage),
    )
)]
#[instrument(skip(state, payload))]
pub async fn update_sport(
    State(state): State<AppState>,
    Path(sport): Path<String>,
    Json(payload): Json<UpdateSportRequest>,
) -> Result<Json<StatusMessage>, ApiError> {
    let recommended = repo::encode_foods(&payload.recommended_foods)
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    let avoid =
        repo::encode_foods(&payload.avoid_foods).map_err(|e| ApiError::Internal(e.to_string()))?;

    let affected = repo::update(&state.db, &sport, &recommended, &avoid)
        .await
        .map_err(|e| {
            error!(error = %e, %sport, "update sport failed");
            ApiError::Internal("Error updating sport data".into())
        })?;

    if affected == 0 {
        return Err(ApiError::NotFound("Sport not found".into()));
    }

    info!(%sport, "sport updated");
    Ok(Json(StatusMessage::ok("Sport data updated successfully")))
}

#[utoipa::path(
    delete,
    path = "/sports/{sport}",
    tag = "sports",
    params(("sport" = String, Path, description = "Sport name, matched exactly")),
    responses(
        (status = 200, description = "Sport removed", body = StatusMessage),
        (status = 404, description = "Sport not found", body = StatusMessage),
        (status = 500, description = "Store failure", body = StatusMessage),
    )
)]
#[instrument(skip(state))]
pub async fn delete_sport(
    State(state): State<AppState>,
    Path(sport): Path<String>,
) -> Result<Json<StatusMessage>, ApiError> {
    let affected = repo::delete(&state.db, &sport).await.map_err(|e| {
        error!(error = %e, %sport, "delete sport failed");
        ApiError::Internal("Error deleting sport data".into())
    })?;

    if affected == 0 {
        return Err(ApiError::NotFound("Sport not found".into()));
    }

    info!(%sport, "sport deleted");
    Ok(Json(StatusMessage::ok("Sport data deleted successfully")))
}
