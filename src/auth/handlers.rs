use std::time::Duration;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    Json,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info, instrument, warn};

use crate::{
    auth::{
        dto::{AuthRequest, AuthResponse},
        password::hash_password,
        repo::User,
    },
    error::{api_error, internal, ApiError},
    state::AppState,
};

/// CORS policy for the auth endpoint. The preflight advertises the headers
/// the browser client actually sends.
pub fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static("x-user-id")])
        .max_age(Duration::from_secs(86_400))
}

#[instrument(skip(state, payload))]
pub async fn authenticate(
    State(state): State<AppState>,
    payload: Option<Json<AuthRequest>>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    // A missing or non-JSON body behaves like an empty one.
    let mut payload = payload.map(|Json(p)| p).unwrap_or_default();

    payload.email = payload.email.trim().to_lowercase();
    payload.username = payload.username.trim().to_string();

    if payload.email.is_empty() || payload.password.is_empty() {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "Email and password required",
        ));
    }

    match payload.action.as_str() {
        "register" => register(&state, payload).await,
        "login" => login(&state, payload).await,
        _ => Err(api_error(StatusCode::BAD_REQUEST, "Invalid action")),
    }
}

async fn register(
    state: &AppState,
    payload: AuthRequest,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    if payload.username.is_empty() {
        return Err(api_error(StatusCode::BAD_REQUEST, "Username required"));
    }

    // One pooled connection per request, given back on every return path.
    let mut conn = state.db.acquire().await.map_err(|e| {
        error!(error = %e, "acquire db connection failed");
        internal(e)
    })?;

    if User::find_by_email(&mut conn, &payload.email)
        .await
        .map_err(|e| {
            error!(error = %e, "find_by_email failed");
            internal(e)
        })?
        .is_some()
    {
        warn!(email = %payload.email, "email already registered");
        return Err(api_error(StatusCode::CONFLICT, "User already exists"));
    }

    let hash = hash_password(&payload.password);
    let user = User::create(&mut conn, &payload.email, &hash, &payload.username)
        .await
        .map_err(|e| {
            error!(error = %e, "create user failed");
            internal(e)
        })?;

    info!(user_id = user.id, email = %user.email, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            success: true,
            user: user.into(),
        }),
    ))
}

async fn login(
    state: &AppState,
    payload: AuthRequest,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let mut conn = state.db.acquire().await.map_err(|e| {
        error!(error = %e, "acquire db connection failed");
        internal(e)
    })?;

    let hash = hash_password(&payload.password);
    let user = match User::find_by_credentials(&mut conn, &payload.email, &hash).await {
        Ok(Some(u)) => u,
        Ok(None) => {
            warn!(email = %payload.email, "login with invalid credentials");
            return Err(api_error(StatusCode::UNAUTHORIZED, "Invalid credentials"));
        }
        Err(e) => {
            error!(error = %e, "find_by_credentials failed");
            return Err(internal(e));
        }
    };

    User::touch_last_login(&mut conn, user.id)
        .await
        .map_err(|e| {
            error!(error = %e, "touch_last_login failed");
            internal(e)
        })?;

    info!(user_id = user.id, email = %user.email, "user logged in");
    Ok((
        StatusCode::OK,
        Json(AuthResponse {
            success: true,
            user: user.into(),
        }),
    ))
}
