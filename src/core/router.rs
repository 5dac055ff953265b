use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    middleware::{from_fn, from_fn_with_state},
    routing::get,
    Router,
};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::Config;
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SessionCookieScheme, SwaggerInfoModifier};
use crate::features::auth::{routes as auth_routes, AuthService, AuthState, SessionCookies};
use crate::features::categories::{routes as categories_routes, CategoryService};
use crate::features::items::{routes as items_routes, ItemService};
use crate::features::menu::{routes as menu_routes, MenuService};

/// Services the HTTP layer is built from
#[derive(Clone)]
pub struct AppServices {
    pub auth: Arc<AuthService>,
    pub menu: Arc<MenuService>,
    pub categories: Arc<CategoryService>,
    pub items: Arc<ItemService>,
}

async fn health_check() -> StatusCode {
    StatusCode::OK
}

fn swagger_router(config: &Config) -> Router {
    let mut openapi = ApiDoc::openapi();
    SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    }
    .modify(&mut openapi);
    SessionCookieScheme {
        cookie_name: config.session.cookie_name.clone(),
    }
    .modify(&mut openapi);

    let swagger =
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi));

    if let Some(credentials) = config.swagger.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        swagger.layer(from_fn(middleware::basic_auth_middleware(Arc::new(
            credentials,
        ))))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        swagger
    }
}

/// Assemble the full application: API routes, docs, static assets and the
/// cross-cutting layers.
pub fn build_router(services: AppServices, config: &Config) -> Router {
    let auth_state = AuthState::new(
        Arc::clone(&services.auth),
        SessionCookies::new(&config.session),
    );

    // Admin routes (require a valid session)
    let protected_routes = Router::new()
        .merge(categories_routes::routes(services.categories))
        .merge(items_routes::routes(services.items))
        .route_layer(from_fn_with_state(
            auth_state.clone(),
            middleware::session_middleware,
        ));

    // Public routes (no auth required)
    let public_routes = Router::new()
        .merge(auth_routes::routes(auth_state))
        .merge(menu_routes::routes(services.menu))
        .route("/health", get(health_check));

    let static_dir = Path::new(&config.app.static_dir);
    let admin_page = ServeFile::new(static_dir.join("admin").join("index.html"));

    Router::new()
        .merge(swagger_router(config))
        .merge(protected_routes)
        .merge(public_routes)
        .route_service("/admin", admin_page)
        .fallback_service(ServeDir::new(static_dir))
        .layer(DefaultBodyLimit::max(config.app.max_request_body_size))
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
}
