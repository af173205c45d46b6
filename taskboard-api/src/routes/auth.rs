/// Authentication endpoints
///
/// # Endpoints
///
/// - `POST /auth/register` - Register a new user
/// - `POST /auth/login` - Log in and receive a session token
///
/// Login deliberately answers an unknown username and a wrong password
/// with the same 401 body, so the endpoint cannot be used to enumerate
/// usernames.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult, Json},
};
use axum::{extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use taskboard_shared::{
    auth::{jwt, password},
    models::user::{CreateUser, Role, User},
};
use validator::Validate;

/// Register request
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Login name
    #[validate(
        required(message = "Username is required"),
        length(min = 1, message = "Username must not be empty")
    )]
    pub username: Option<String>,

    /// Plaintext password, hashed before it is stored
    #[validate(
        required(message = "Password is required"),
        length(min = 1, message = "Password must not be empty")
    )]
    pub password: Option<String>,

    /// Role for the new account; defaults to "user" when omitted
    pub role: Option<Role>,
}

/// Register response
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    /// Confirmation message
    pub message: String,
}

/// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login name
    #[validate(required(message = "Username is required"))]
    pub username: Option<String>,

    /// Plaintext password
    #[validate(required(message = "Password is required"))]
    pub password: Option<String>,
}

/// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Session token (1 hour)
    pub token: String,

    /// Role of the authenticated user
    pub role: Role,

    /// Login name echoed back for display
    pub username: String,
}

/// Register a new user
///
/// # Endpoint
///
/// ```text
/// POST /auth/register
/// Content-Type: application/json
///
/// {
///   "username": "alice",
///   "password": "hunter2-but-better",
///   "role": "admin"
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Missing fields or the username already exists
/// - `500 Internal Server Error`: Server error
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<RegisterResponse>)> {
    req.validate()?;

    let username = req
        .username
        .ok_or_else(|| ApiError::BadRequest("Username is required".to_string()))?;
    let plaintext = req
        .password
        .ok_or_else(|| ApiError::BadRequest("Password is required".to_string()))?;

    let password_hash = password::hash_password(&plaintext)?;

    User::create(
        &state.db,
        CreateUser {
            username,
            password_hash,
            role: req.role.unwrap_or_default(),
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully!".to_string(),
        }),
    ))
}

/// Login endpoint
///
/// Authenticates a user and returns a session token.
///
/// # Endpoint
///
/// ```text
/// POST /auth/login
/// Content-Type: application/json
///
/// {
///   "username": "alice",
///   "password": "hunter2-but-better"
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "token": "eyJ...",
///   "role": "admin",
///   "username": "alice"
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Missing fields
/// - `401 Unauthorized`: Unknown username or wrong password (same body
///   for both)
/// - `500 Internal Server Error`: Server error
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    req.validate()?;

    let username = req
        .username
        .ok_or_else(|| ApiError::BadRequest("Username is required".to_string()))?;
    let plaintext = req
        .password
        .ok_or_else(|| ApiError::BadRequest("Password is required".to_string()))?;

    // Same response for an unknown user and a wrong password
    let invalid_credentials = || ApiError::Unauthorized("Invalid credentials".to_string());

    let user = User::find_by_username(&state.db, &username)
        .await?
        .ok_or_else(invalid_credentials)?;

    let valid = password::verify_password(&plaintext, &user.password_hash)?;
    if !valid {
        return Err(invalid_credentials());
    }

    let claims = jwt::Claims::new(user.id, user.role);
    let token = jwt::create_token(&claims, state.jwt_secret())?;

    Ok(Json(LoginResponse {
        token,
        role: user.role,
        username: user.username,
    }))
}
