use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::menu::dtos::MenuCategoryDto;
use crate::features::menu::services::MenuService;
use crate::shared::types::{ApiResponse, Meta};

/// Get the full public menu
///
/// Returns every category with its items nested. Prices are returned
/// exactly as stored.
#[utoipa::path(
    get,
    path = "/api/menu",
    responses(
        (status = 200, description = "Menu categories with items", body = ApiResponse<Vec<MenuCategoryDto>>),
        (status = 500, description = "Error fetching menu")
    ),
    tag = "menu"
)]
pub async fn get_menu(
    State(service): State<Arc<MenuService>>,
) -> Result<Json<ApiResponse<Vec<MenuCategoryDto>>>> {
    let menu = service.get_menu().await?;
    let total = menu.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(menu),
        None,
        Some(Meta { total }),
    )))
}
