use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::auth::{dtos as auth_dtos, handlers as auth_handlers};
use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::items::{dtos as items_dtos, handlers as items_handlers};
use crate::features::menu::{dtos as menu_dtos, handlers as menu_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth_handlers::login,
        auth_handlers::logout,
        auth_handlers::check_auth,
        // Menu (public)
        menu_handlers::get_menu,
        // Categories (admin)
        categories_handlers::create_category,
        categories_handlers::update_category,
        categories_handlers::delete_category,
        // Items (admin)
        items_handlers::create_item,
        items_handlers::update_item,
        items_handlers::delete_item,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Auth
            auth_dtos::LoginRequestDto,
            auth_dtos::LoginResponseDto,
            auth_dtos::CheckAuthResponseDto,
            ApiResponse<auth_dtos::LoginResponseDto>,
            ApiResponse<auth_dtos::CheckAuthResponseDto>,
            // Menu
            menu_dtos::MenuCategoryDto,
            ApiResponse<Vec<menu_dtos::MenuCategoryDto>>,
            // Categories
            categories_dtos::CreateCategoryDto,
            categories_dtos::UpdateCategoryDto,
            categories_dtos::CategoryResponseDto,
            ApiResponse<categories_dtos::CategoryResponseDto>,
            // Items
            items_dtos::CreateItemDto,
            items_dtos::UpdateItemDto,
            items_dtos::ItemResponseDto,
            ApiResponse<items_dtos::ItemResponseDto>,
        )
    ),
    tags(
        (name = "auth", description = "Administrator login and session status"),
        (name = "menu", description = "Public bilingual menu (no authentication)"),
        (name = "categories", description = "Menu category management (admin only)"),
        (name = "items", description = "Menu item management (admin only)"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Menu API",
        version = "0.1.0",
        description = "Restaurant menu content API",
    )
)]
pub struct ApiDoc;

/// Default name of the session cookie scheme; overridden from config by
/// [`SessionCookieScheme`].
const DEFAULT_SESSION_COOKIE: &str = "menu_session";

/// Adds the session cookie security scheme to the OpenAPI doc
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        SessionCookieScheme {
            cookie_name: DEFAULT_SESSION_COOKIE.to_string(),
        }
        .modify(openapi);
    }
}

/// Points the `session_cookie` scheme at the configured cookie name
pub struct SessionCookieScheme {
    pub cookie_name: String,
}

impl Modify for SessionCookieScheme {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(&self.cookie_name))),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
