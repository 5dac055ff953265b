use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::Result;
use crate::features::items::dtos::{CreateItemDto, ItemResponseDto, UpdateItemDto};
use crate::features::menu::MenuRepository;

/// Service for item operations
pub struct ItemService {
    repository: Arc<dyn MenuRepository>,
}

impl ItemService {
    pub fn new(repository: Arc<dyn MenuRepository>) -> Self {
        Self { repository }
    }

    /// Create an item; the referenced category must exist
    pub async fn create(&self, dto: CreateItemDto) -> Result<ItemResponseDto> {
        let item = self.repository.create_item(dto.into()).await?;
        tracing::info!("Created item '{}' ({})", item.name_en, item.id);
        Ok(item.into())
    }

    /// Apply a partial update; only supplied fields change
    pub async fn update(&self, id: Uuid, dto: UpdateItemDto) -> Result<ItemResponseDto> {
        let item = self.repository.update_item(id, dto.into()).await?;
        Ok(item.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        self.repository.delete_item(id).await?;
        tracing::info!("Deleted item {}", id);
        Ok(())
    }
}
