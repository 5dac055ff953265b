use std::sync::Arc;

use crate::core::error::Result;
use crate::features::menu::dtos::MenuCategoryDto;
use crate::features::menu::MenuRepository;

/// Read side of the public menu
pub struct MenuService {
    repository: Arc<dyn MenuRepository>,
}

impl MenuService {
    pub fn new(repository: Arc<dyn MenuRepository>) -> Self {
        Self { repository }
    }

    /// Every category with its items, in insertion order
    pub async fn get_menu(&self) -> Result<Vec<MenuCategoryDto>> {
        let menu = self.repository.list_categories_with_items().await?;
        Ok(menu.into_iter().map(MenuCategoryDto::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::categories::models::NewCategory;
    use crate::features::items::models::NewItem;
    use crate::shared::test_helpers::MemoryMenuRepository;

    #[tokio::test]
    async fn test_menu_nests_items_under_their_category() {
        let repository = Arc::new(MemoryMenuRepository::default());
        let burgers = repository
            .create_category(NewCategory {
                name: "Burgers".to_string(),
                slug: "burgers".to_string(),
            })
            .await
            .unwrap();
        repository
            .create_category(NewCategory {
                name: "Fries".to_string(),
                slug: "fries".to_string(),
            })
            .await
            .unwrap();
        repository
            .create_item(NewItem {
                category_id: burgers.id,
                name_en: "BBQ Burger".to_string(),
                name_ar: "برجر باربكيو".to_string(),
                description: None,
                price: "$4.00".to_string(),
                image_url: None,
                is_featured: false,
            })
            .await
            .unwrap();

        let menu = MenuService::new(repository).get_menu().await.unwrap();

        assert_eq!(menu.len(), 2);
        assert_eq!(menu[0].slug, "burgers");
        assert_eq!(menu[0].items.len(), 1);
        assert_eq!(menu[0].items[0].price, "$4.00");
        assert_eq!(menu[1].slug, "fries");
        assert!(menu[1].items.is_empty());
    }
}
