use axum::{
    extract::{FromRef, State},
    routing::post,
    Json, Router,
};
use tracing::{error, info, instrument, warn};

use crate::{
    error::{ApiError, StatusMessage},
    state::AppState,
};

use super::dto::{LoginRequest, LoginResponse, SignupRequest};
use super::jwt::JwtKeys;
use super::password::{hash_password, verify_password};
use super::repo::User;

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
}

#[utoipa::path(
    post,
    path = "/signup",
    tag = "auth",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "User created", body = StatusMessage),
        (status = 400, description = "A required field is missing", body = StatusMessage),
        (status = 500, description = "Hashing or store failure, including duplicate emails", body = StatusMessage),
    )
)]
#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<Json<StatusMessage>, ApiError> {
    if !payload.has_all_fields() {
        warn!("signup with missing fields");
        return Err(ApiError::Validation("All fields are required".into()));
    }

    let hash = hash_password(&payload.password).map_err(|e| {
        error!(error = %e, "hash password failed");
        ApiError::Internal("Error hashing password".into())
    })?;

    // Duplicate emails trip the unique constraint; the client only sees a
    // generic failure, the real error goes to the log.
    let user = User::create(
        &state.db,
        &payload.email,
        &payload.name,
        &payload.contact_num,
        &hash,
    )
    .await
    .map_err(|e| {
        error!(error = %e, email = %payload.email, "create user failed");
        ApiError::Internal("Error creating user".into())
    })?;

    info!(user_id = %user.id, email = %user.email, "user signed up");
    Ok(Json(StatusMessage::ok("User created successfully")))
}

#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed token and display name", body = LoginResponse),
        (status = 400, description = "Email or password missing", body = StatusMessage),
        (status = 401, description = "Incorrect password", body = StatusMessage),
        (status = 404, description = "No user with that email", body = StatusMessage),
        (status = 500, description = "Store, hashing or signing failure", body = StatusMessage),
    )
)]
#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    if payload.email.is_empty() || payload.password.is_empty() {
        warn!("login with missing fields");
        return Err(ApiError::Validation(
            "Email and password are required".into(),
        ));
    }

    let user = User::find_by_email(&state.db, &payload.email)
        .await
        .map_err(|e| {
            error!(error = %e, "find user failed");
            ApiError::Internal("Error retrieving user data".into())
        })?
        .ok_or_else(|| {
            warn!(email = %payload.email, "login unknown email");
            ApiError::NotFound("User not found".into())
        })?;

    let ok = verify_password(&payload.password, &user.password).map_err(|e| {
        error!(error = %e, user_id = %user.id, "verify password failed");
        ApiError::Internal("Error comparing passwords".into())
    })?;

    if !ok {
        warn!(user_id = %user.id, "login incorrect password");
        return Err(ApiError::Unauthorized("Incorrect password".into()));
    }

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(user.id, &user.email).map_err(|e| {
        error!(error = %e, user_id = %user.id, "jwt sign failed");
        ApiError::Internal("Error generating token".into())
    })?;

    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok(Json(LoginResponse {
        success: true,
        token,
        name: user.name,
    }))
}
