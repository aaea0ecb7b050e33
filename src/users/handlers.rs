use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tracing::{error, info, instrument, warn};

use crate::{
    error::{ApiError, ApiResult},
    extract::{IdPath, JsonBody},
    fields,
    state::AppState,
    users::{
        dto::{AuthenticateRequest, AuthenticateResponse, CreateUserRequest, CreatedResponse},
        repo_types::User,
        services::{credentials_match, new_user_from_request},
    },
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user))
        .route("/users/authenticate", post(authenticate))
        .route("/users/:id", get(get_user))
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateUserRequest>,
) -> ApiResult<Json<CreatedResponse>> {
    let new_user = new_user_from_request(payload).map_err(|e| {
        warn!(error = %e, "create user rejected");
        ApiError::bad_request(e.to_string())
    })?;

    let id = match User::create(&state.db, &new_user).await {
        Ok(id) => id,
        Err(e) => {
            error!(error = %e, "create user failed");
            return Err(ApiError::internal("User creation error"));
        }
    };

    info!(user_id = id, is_employer = new_user.is_employer, is_employee = new_user.is_employee, "user created");
    Ok(Json(CreatedResponse { id }))
}

#[instrument(skip(state, payload))]
pub async fn authenticate(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<AuthenticateRequest>,
) -> ApiResult<Json<AuthenticateResponse>> {
    let email = fields::required_text("email", payload.email);
    let password = fields::required_text("password", payload.password);
    let (email, password) = match (email, password) {
        (Ok(email), Ok(password)) => (email, password),
        (Err(e), _) | (_, Err(e)) => {
            warn!(error = %e, "authenticate rejected");
            return Err(ApiError::bad_request(e.to_string()));
        }
    };

    let stored = match User::find_credential(&state.db, &email).await {
        Ok(row) => row,
        Err(e) => {
            error!(error = %e, "find_credential failed");
            return Err(ApiError::internal("Authentication error"));
        }
    };

    match stored {
        Some(cred) if credentials_match(&password, &cred.hashed_password) => {
            info!(user_id = cred.id, "user authenticated");
            Ok(Json(AuthenticateResponse::accepted(cred.id)))
        }
        Some(cred) => {
            warn!(user_id = cred.id, "authenticate invalid password");
            Ok(Json(AuthenticateResponse::rejected()))
        }
        None => {
            warn!("authenticate unknown email");
            Ok(Json(AuthenticateResponse::rejected()))
        }
    }
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<User>> {
    match User::find_by_id(&state.db, id).await {
        Ok(Some(user)) => Ok(Json(user)),
        Ok(None) => Err(ApiError::not_found("User not found")),
        Err(e) => {
            error!(error = %e, user_id = id, "get user failed");
            Err(ApiError::internal("User retrieval error"))
        }
    }
}
