use crate::state::AppState;
use axum::routing::get;
use axum::Router;

pub mod client;
pub mod dto;
pub mod handlers;

pub fn router() -> Router<AppState> {
    // The CORS layer answers OPTIONS (preflight or not) with 200 and the
    // configured headers; the fallback catches every other stray method.
    Router::new()
        .route(
            "/search",
            get(handlers::search).fallback(crate::error::method_not_allowed),
        )
        .layer(handlers::cors())
}
