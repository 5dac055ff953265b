use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::categories::models::Category;
use crate::features::items::dtos::ItemResponseDto;
use crate::features::items::models::Item;

/// A category as shown on the public menu, with its items nested
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MenuCategoryDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub items: Vec<ItemResponseDto>,
}

impl From<(Category, Vec<Item>)> for MenuCategoryDto {
    fn from((category, items): (Category, Vec<Item>)) -> Self {
        Self {
            id: category.id,
            name: category.name,
            slug: category.slug,
            items: items.into_iter().map(ItemResponseDto::from).collect(),
        }
    }
}
