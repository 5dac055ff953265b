use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::{Category, CategoryChanges, NewCategory};
use crate::features::items::models::{Item, ItemChanges, NewItem};

const SLUG_CONFLICT: &str = "A category with this slug already exists";

/// Storage for categories and their items (one-to-many).
///
/// Updates and deletes of an unknown id fail with `NotFound`. Deleting a
/// category deletes its items.
#[async_trait]
pub trait MenuRepository: Send + Sync {
    /// Every category with its items, both in insertion order.
    async fn list_categories_with_items(&self) -> Result<Vec<(Category, Vec<Item>)>>;

    async fn count_categories(&self) -> Result<i64>;

    async fn create_category(&self, category: NewCategory) -> Result<Category>;

    async fn update_category(&self, id: Uuid, changes: CategoryChanges) -> Result<Category>;

    async fn delete_category(&self, id: Uuid) -> Result<()>;

    async fn create_item(&self, item: NewItem) -> Result<Item>;

    async fn update_item(&self, id: Uuid, changes: ItemChanges) -> Result<Item>;

    async fn delete_item(&self, id: Uuid) -> Result<()>;
}

/// Group items under their categories, keeping category order.
pub fn group_items(categories: Vec<Category>, items: Vec<Item>) -> Vec<(Category, Vec<Item>)> {
    let mut by_category: HashMap<Uuid, Vec<Item>> = HashMap::new();
    for item in items {
        by_category.entry(item.category_id).or_default().push(item);
    }

    categories
        .into_iter()
        .map(|category| {
            let items = by_category.remove(&category.id).unwrap_or_default();
            (category, items)
        })
        .collect()
}

fn category_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Category with id {} not found", id))
}

fn item_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Item with id {} not found", id))
}

/// Postgres-backed menu repository
pub struct PgMenuRepository {
    pool: PgPool,
}

impl PgMenuRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MenuRepository for PgMenuRepository {
    async fn list_categories_with_items(&self) -> Result<Vec<(Category, Vec<Item>)>> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, slug, created_at, updated_at
            FROM categories
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Database(e)
        })?;

        let items = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, category_id, name_en, name_ar, description, price, image_url,
                   is_featured, created_at, updated_at
            FROM items
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list items: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(group_items(categories, items))
    }

    async fn count_categories(&self) -> Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn create_category(&self, category: NewCategory) -> Result<Category> {
        sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (name, slug)
            VALUES ($1, $2)
            RETURNING id, name, slug, created_at, updated_at
            "#,
        )
        .bind(&category.name)
        .bind(&category.slug)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_db(e, SLUG_CONFLICT))
    }

    async fn update_category(&self, id: Uuid, changes: CategoryChanges) -> Result<Category> {
        sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories
            SET name = COALESCE($1, name),
                slug = COALESCE($2, slug),
                updated_at = NOW()
            WHERE id = $3
            RETURNING id, name, slug, created_at, updated_at
            "#,
        )
        .bind(changes.name)
        .bind(changes.slug)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::from_db(e, SLUG_CONFLICT))?
        .ok_or_else(|| category_not_found(id))
    }

    async fn delete_category(&self, id: Uuid) -> Result<()> {
        // items.category_id is ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete category: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(category_not_found(id));
        }

        Ok(())
    }

    async fn create_item(&self, item: NewItem) -> Result<Item> {
        sqlx::query_as::<_, Item>(
            r#"
            INSERT INTO items (category_id, name_en, name_ar, description, price, image_url, is_featured)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, category_id, name_en, name_ar, description, price, image_url,
                      is_featured, created_at, updated_at
            "#,
        )
        .bind(item.category_id)
        .bind(&item.name_en)
        .bind(&item.name_ar)
        .bind(&item.description)
        .bind(&item.price)
        .bind(&item.image_url)
        .bind(item.is_featured)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_db(e, "Item already exists"))
    }

    async fn update_item(&self, id: Uuid, changes: ItemChanges) -> Result<Item> {
        // Nullable columns take a presence flag so an explicit null clears them
        sqlx::query_as::<_, Item>(
            r#"
            UPDATE items
            SET category_id = COALESCE($1, category_id),
                name_en = COALESCE($2, name_en),
                name_ar = COALESCE($3, name_ar),
                description = CASE WHEN $4 THEN $5 ELSE description END,
                price = COALESCE($6, price),
                image_url = CASE WHEN $7 THEN $8 ELSE image_url END,
                is_featured = COALESCE($9, is_featured),
                updated_at = NOW()
            WHERE id = $10
            RETURNING id, category_id, name_en, name_ar, description, price, image_url,
                      is_featured, created_at, updated_at
            "#,
        )
        .bind(changes.category_id)
        .bind(changes.name_en)
        .bind(changes.name_ar)
        .bind(changes.description.is_some())
        .bind(changes.description.flatten())
        .bind(changes.price)
        .bind(changes.image_url.is_some())
        .bind(changes.image_url.flatten())
        .bind(changes.is_featured)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::from_db(e, "Item already exists"))?
        .ok_or_else(|| item_not_found(id))
    }

    async fn delete_item(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete item: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(item_not_found(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn category(name: &str) -> Category {
        let now = Utc::now();
        Category {
            id: Uuid::new_v4(),
            name: name.to_string(),
            slug: name.to_lowercase(),
            created_at: now,
            updated_at: now,
        }
    }

    fn item(category_id: Uuid, name: &str) -> Item {
        let now = Utc::now();
        Item {
            id: Uuid::new_v4(),
            category_id,
            name_en: name.to_string(),
            name_ar: name.to_string(),
            description: None,
            price: "$1.00".to_string(),
            image_url: None,
            is_featured: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_group_items_keeps_category_and_item_order() {
        let burgers = category("Burgers");
        let drinks = category("Drinks");
        let empty = category("Empty");
        let items = vec![
            item(drinks.id, "Water"),
            item(burgers.id, "Classic"),
            item(drinks.id, "Laban"),
            item(burgers.id, "BBQ"),
        ];

        let grouped = group_items(vec![burgers, drinks, empty], items);

        let names: Vec<(&str, Vec<&str>)> = grouped
            .iter()
            .map(|(c, items)| {
                (
                    c.name.as_str(),
                    items.iter().map(|i| i.name_en.as_str()).collect(),
                )
            })
            .collect();
        assert_eq!(
            names,
            vec![
                ("Burgers", vec!["Classic", "BBQ"]),
                ("Drinks", vec!["Water", "Laban"]),
                ("Empty", vec![]),
            ]
        );
    }

    #[test]
    fn test_group_items_drops_items_without_category() {
        let burgers = category("Burgers");
        let grouped = group_items(vec![burgers], vec![item(Uuid::new_v4(), "Orphan")]);

        assert_eq!(grouped.len(), 1);
        assert!(grouped[0].1.is_empty());
    }
}
