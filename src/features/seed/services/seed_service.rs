use std::sync::Arc;

use crate::core::config::AdminConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::hash_password;
use crate::features::categories::models::NewCategory;
use crate::features::items::models::NewItem;
use crate::features::menu::MenuRepository;
use crate::features::seed::data::{SeedCategory, CATALOG};
use crate::features::users::UserRepository;

/// What a seeding run changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub admin_created: bool,
    pub categories_inserted: usize,
    pub items_inserted: usize,
}

/// Populates the admin account and the initial menu on first start.
///
/// Each step is idempotent on its own: the admin is only created when the
/// username is absent, and the menu is only seeded when the store holds no
/// categories at all. Statements are not wrapped in a transaction.
pub struct SeedService {
    users: Arc<dyn UserRepository>,
    menu: Arc<dyn MenuRepository>,
}

impl SeedService {
    pub fn new(users: Arc<dyn UserRepository>, menu: Arc<dyn MenuRepository>) -> Self {
        Self { users, menu }
    }

    pub async fn run(&self, admin: &AdminConfig) -> Result<SeedReport> {
        let admin_created = self.ensure_admin(admin).await?;
        let (categories_inserted, items_inserted) = self.seed_menu(CATALOG).await?;

        Ok(SeedReport {
            admin_created,
            categories_inserted,
            items_inserted,
        })
    }

    async fn ensure_admin(&self, admin: &AdminConfig) -> Result<bool> {
        if self.users.find_by_username(&admin.username).await?.is_some() {
            tracing::info!("Admin user already exists");
            return Ok(false);
        }

        let password = admin.password.clone();
        let hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| AppError::Internal(format!("Password hashing task failed: {}", e)))??;

        match self.users.create(&admin.username, &hash).await {
            Ok(_) => {
                tracing::info!("Admin user '{}' created", admin.username);
                Ok(true)
            }
            // Another instance won the race; the account exists either way
            Err(AppError::Conflict(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    async fn seed_menu(&self, catalog: &[SeedCategory]) -> Result<(usize, usize)> {
        if self.menu.count_categories().await? > 0 {
            tracing::info!("Menu data already exists. Skipping seed.");
            return Ok((0, 0));
        }

        tracing::info!("Seeding menu data...");
        let mut items_inserted = 0;
        for seed in catalog {
            let category = self
                .menu
                .create_category(NewCategory {
                    name: seed.name.to_string(),
                    slug: seed.slug.to_string(),
                })
                .await?;

            for item in seed.items {
                self.menu
                    .create_item(NewItem {
                        category_id: category.id,
                        name_en: item.name_en.to_string(),
                        name_ar: item.name_ar.to_string(),
                        description: None,
                        price: item.price.to_string(),
                        image_url: None,
                        is_featured: item.is_featured,
                    })
                    .await?;
                items_inserted += 1;
            }
        }

        tracing::info!(
            "Menu data seeded: {} categories, {} items",
            catalog.len(),
            items_inserted
        );
        Ok((catalog.len(), items_inserted))
    }
}
