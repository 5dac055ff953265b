use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::items::models::{Item, ItemChanges, NewItem};
use crate::shared::nullable::present;

/// Request DTO for creating an item
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateItemDto {
    /// Category the item belongs to (`CategoryId` is accepted too)
    #[serde(alias = "CategoryId")]
    pub category_id: Uuid,

    #[validate(length(min = 1, max = 255, message = "English name is required"))]
    pub name_en: String,

    #[validate(length(min = 1, max = 255, message = "Arabic name is required"))]
    pub name_ar: String,

    pub description: Option<String>,

    /// Free-form price text, stored verbatim (e.g. "$4.00", "100,000 L.L")
    #[validate(length(min = 1, max = 255, message = "Price is required"))]
    pub price: String,

    #[validate(length(max = 2048, message = "Image URL is too long"))]
    pub image_url: Option<String>,

    #[serde(default)]
    pub is_featured: bool,
}

/// Request DTO for a partial item update
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateItemDto {
    #[serde(alias = "CategoryId")]
    pub category_id: Option<Uuid>,

    #[validate(length(min = 1, max = 255, message = "English name cannot be empty"))]
    pub name_en: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Arabic name cannot be empty"))]
    pub name_ar: Option<String>,

    /// Omit to keep, `null` to clear
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,

    #[validate(length(min = 1, max = 255, message = "Price cannot be empty"))]
    pub price: Option<String>,

    /// Omit to keep, `null` to clear
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 2048, message = "Image URL is too long"))]
    pub image_url: Option<Option<String>>,

    pub is_featured: Option<bool>,
}

/// Response DTO for item
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ItemResponseDto {
    pub id: Uuid,
    pub category_id: Uuid,
    pub name_en: String,
    pub name_ar: String,
    pub description: Option<String>,
    pub price: String,
    pub image_url: Option<String>,
    pub is_featured: bool,
}

impl From<Item> for ItemResponseDto {
    fn from(i: Item) -> Self {
        Self {
            id: i.id,
            category_id: i.category_id,
            name_en: i.name_en,
            name_ar: i.name_ar,
            description: i.description,
            price: i.price,
            image_url: i.image_url,
            is_featured: i.is_featured,
        }
    }
}

impl From<CreateItemDto> for NewItem {
    fn from(dto: CreateItemDto) -> Self {
        Self {
            category_id: dto.category_id,
            name_en: dto.name_en,
            name_ar: dto.name_ar,
            description: dto.description,
            price: dto.price,
            image_url: dto.image_url,
            is_featured: dto.is_featured,
        }
    }
}

impl From<UpdateItemDto> for ItemChanges {
    fn from(dto: UpdateItemDto) -> Self {
        Self {
            category_id: dto.category_id,
            name_en: dto.name_en,
            name_ar: dto.name_ar,
            description: dto.description,
            price: dto.price,
            image_url: dto.image_url,
            is_featured: dto.is_featured,
        }
    }
}
