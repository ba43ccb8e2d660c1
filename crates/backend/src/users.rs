// =============================================================================
// StorePulse Backend - Users API
// =============================================================================

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::Serialize;
use storepulse_common::{InsertUser, User, Validate};

use crate::error::ApiError;
use crate::params::parse_id;
use crate::AppState;

/// User response (without the password).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

/// Hash a password using Argon2.
fn hash_password(password: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| ApiError::Internal(format!("password hashing failed: {}", e)))
}

/// Register a new user.
pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<InsertUser>, JsonRejection>,
) -> Result<Json<UserResponse>, ApiError> {
    let Json(req) = payload.map_err(ApiError::invalid_body("Invalid user data"))?;
    req.validate().map_err(ApiError::invalid_value("Invalid user data"))?;

    // create_user re-checks under the write lock.
    if state.store.get_user_by_username(&req.username).await.is_some() {
        return Err(ApiError::Conflict("Username already exists".into()));
    }

    let password = hash_password(&req.password)?;
    let user = state
        .store
        .create_user(InsertUser {
            username: req.username,
            password,
        })
        .await?;

    tracing::info!(id = user.id, username = %user.username, "User registered");
    Ok(Json(user.into()))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let id = parse_id(&id, "user")?;
    state
        .store
        .get_user(id)
        .await
        .map(|u| Json(u.into()))
        .ok_or_else(|| ApiError::not_found("User not found"))
}
