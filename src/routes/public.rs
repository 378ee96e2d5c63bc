use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::services::{ServeDir, ServeFile};

/// Public Router Module
///
/// Defines the endpoints reachable without a session: the health check used
/// by monitoring, the login/registration gateway, and the static HTML shells
/// of the admin SPA (which fetch their data from the authenticated JSON API
/// once the browser holds a token).
pub fn public_routes() -> Router<AppState> {
    Router::new()
        // GET /health
        // Unauthenticated endpoint used for monitoring and load balancer checks.
        .route("/health", get(|| async { "ok" }))
        // POST /login
        // OAuth2-style password grant issuing the JWT the SPA stores.
        .route("/login", post(handlers::auth::login))
        // POST /user
        // Self-service registration; accounts start as pending_approval.
        .route("/user", post(handlers::users::register_user))
        // Static frontend shells. The pages carry no data of their own, so
        // serving them publicly leaks nothing; every fetch they issue goes
        // through the authenticated API.
        .route_service("/", ServeFile::new("static/login.html"))
        .nest_service("/static", ServeDir::new("static"))
}
