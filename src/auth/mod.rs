use crate::state::AppState;
use axum::routing::post;
use axum::Router;

pub mod dto;
pub mod handlers;
pub mod password;
pub mod repo;

pub fn router() -> Router<AppState> {
    // The CORS layer answers OPTIONS (preflight or not) with 200 and the
    // configured headers; the fallback catches every other stray method.
    Router::new()
        .route(
            "/auth",
            post(handlers::authenticate).fallback(crate::error::method_not_allowed),
        )
        .layer(handlers::cors())
}
