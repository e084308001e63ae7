//! Handlers for the `/auth` resource.

use audhub_core::error::CoreError;
use audhub_core::types::DbId;
use audhub_db::repositories::UserRepo;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub username: String,
    pub display_name: String,
    pub role: String,
}

/// POST /api/v1/auth/login
///
/// Verify credentials and issue an access token. Unknown usernames and
/// wrong passwords produce the same 401 so the response does not reveal
/// which of the two was wrong.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<DataResponse<LoginResponse>>> {
    let user = UserRepo::find_by_username(&state.pool, &payload.username)
        .await?
        .ok_or_else(invalid_credentials)?;

    let valid = verify_password(&payload.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification failed: {e}")))?;
    if !valid {
        return Err(invalid_credentials());
    }

    let token = generate_access_token(user.id, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;

    tracing::info!(user_id = user.id, username = %user.username, "User logged in");

    Ok(Json(DataResponse {
        data: LoginResponse {
            token,
            user: UserInfo {
                id: user.id,
                username: user.username,
                display_name: user.display_name,
                role: user.role,
            },
        },
    }))
}

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized(
        "Invalid username or password".into(),
    ))
}
