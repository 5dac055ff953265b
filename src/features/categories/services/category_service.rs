use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::Result;
use crate::features::categories::dtos::{
    CategoryResponseDto, CreateCategoryDto, UpdateCategoryDto,
};
use crate::features::menu::MenuRepository;

/// Service for category operations
pub struct CategoryService {
    repository: Arc<dyn MenuRepository>,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn MenuRepository>) -> Self {
        Self { repository }
    }

    /// Create a category; fails with `Conflict` if the slug is taken
    pub async fn create(&self, dto: CreateCategoryDto) -> Result<CategoryResponseDto> {
        let category = self.repository.create_category(dto.into()).await?;
        tracing::info!("Created category '{}' ({})", category.slug, category.id);
        Ok(category.into())
    }

    /// Apply a partial update; only supplied fields change
    pub async fn update(&self, id: Uuid, dto: UpdateCategoryDto) -> Result<CategoryResponseDto> {
        let category = self.repository.update_category(id, dto.into()).await?;
        Ok(category.into())
    }

    /// Delete a category together with its items
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        self.repository.delete_category(id).await?;
        tracing::info!("Deleted category {}", id);
        Ok(())
    }
}
