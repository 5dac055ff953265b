use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a menu item
#[derive(Debug, Clone, FromRow)]
pub struct Item {
    pub id: Uuid,
    pub category_id: Uuid,
    pub name_en: String,
    pub name_ar: String,
    pub description: Option<String>,
    /// Free-form price text such as "$4.00" or "100,000 L.L"
    pub price: String,
    pub image_url: Option<String>,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to insert an item
#[derive(Debug, Clone)]
pub struct NewItem {
    pub category_id: Uuid,
    pub name_en: String,
    pub name_ar: String,
    pub description: Option<String>,
    pub price: String,
    pub image_url: Option<String>,
    pub is_featured: bool,
}

/// Partial update; `None` leaves the column unchanged.
///
/// Nullable columns are doubly optional: `Some(None)` clears the value.
#[derive(Debug, Clone, Default)]
pub struct ItemChanges {
    pub category_id: Option<Uuid>,
    pub name_en: Option<String>,
    pub name_ar: Option<String>,
    pub description: Option<Option<String>>,
    pub price: Option<String>,
    pub image_url: Option<Option<String>>,
    pub is_featured: Option<bool>,
}
