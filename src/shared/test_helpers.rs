//! In-memory stores and an HTTP harness for unit and handler tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::Utc;
use uuid::Uuid;

use crate::core::config::{
    AdminConfig, AppConfig, Config, DatabaseConfig, SessionConfig, SwaggerConfig,
};
use crate::core::error::{AppError, Result};
use crate::core::router::{build_router, AppServices};
use crate::features::auth::session_store::{expiry_from, generate_token, Session, SessionStore};
use crate::features::auth::{hash_password, AuthService};
use crate::features::categories::models::{Category, CategoryChanges, NewCategory};
use crate::features::categories::CategoryService;
use crate::features::items::models::{Item, ItemChanges, NewItem};
use crate::features::items::ItemService;
use crate::features::menu::repository::group_items;
use crate::features::menu::{MenuRepository, MenuService};
use crate::features::users::{User, UserRepository};

pub const TEST_ADMIN_USERNAME: &str = "Admin";
pub const TEST_ADMIN_PASSWORD: &str = "test-password";

#[derive(Default)]
pub struct MemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl MemoryUserRepository {
    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn create(&self, username: &str, password_hash: &str) -> Result<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.username == username) {
            return Err(AppError::Conflict(
                "A user with this username already exists".to_string(),
            ));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            created_at: now,
            updated_at: now,
        };
        users.push(user.clone());
        Ok(user)
    }
}

/// Simulated outage: every store call fails like a dropped connection pool
fn store_unavailable(flag: &AtomicBool) -> Result<()> {
    if flag.load(Ordering::SeqCst) {
        return Err(AppError::Database(sqlx::Error::PoolTimedOut));
    }
    Ok(())
}

#[derive(Default)]
pub struct MemorySessionStore {
    sessions: Mutex<Vec<Session>>,
    unavailable: AtomicBool,
}

impl MemorySessionStore {
    pub fn len(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn create(&self, user_id: Uuid, ttl: Duration) -> Result<Session> {
        store_unavailable(&self.unavailable)?;
        let now = Utc::now();
        let session = Session {
            token: generate_token(),
            user_id,
            created_at: now,
            expires_at: expiry_from(now, ttl)?,
        };
        self.sessions.lock().unwrap().push(session.clone());
        Ok(session)
    }

    async fn find_valid(&self, token: &str) -> Result<Option<Session>> {
        store_unavailable(&self.unavailable)?;
        let mut sessions = self.sessions.lock().unwrap();
        let Some(pos) = sessions.iter().position(|s| s.token == token) else {
            return Ok(None);
        };

        if sessions[pos].is_expired_at(Utc::now()) {
            sessions.remove(pos);
            return Ok(None);
        }
        Ok(Some(sessions[pos].clone()))
    }

    async fn delete(&self, token: &str) -> Result<()> {
        store_unavailable(&self.unavailable)?;
        self.sessions.lock().unwrap().retain(|s| s.token != token);
        Ok(())
    }

    async fn purge_expired(&self) -> Result<u64> {
        store_unavailable(&self.unavailable)?;
        let now = Utc::now();
        let mut sessions = self.sessions.lock().unwrap();
        let before = sessions.len();
        sessions.retain(|s| !s.is_expired_at(now));
        Ok((before - sessions.len()) as u64)
    }
}

#[derive(Default)]
struct MenuState {
    categories: Vec<Category>,
    items: Vec<Item>,
}

/// Insertion-ordered menu store with the same failure modes as Postgres:
/// slug conflicts, dangling category references and unknown ids.
#[derive(Default)]
pub struct MemoryMenuRepository {
    state: Mutex<MenuState>,
    unavailable: AtomicBool,
}

impl MemoryMenuRepository {
    pub fn item_count(&self) -> usize {
        self.state.lock().unwrap().items.len()
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }
}

fn slug_conflict() -> AppError {
    AppError::Conflict("A category with this slug already exists".to_string())
}

fn missing_reference() -> AppError {
    AppError::Validation("Referenced record does not exist".to_string())
}

fn apply_category_changes(category: &mut Category, changes: CategoryChanges) {
    if let Some(name) = changes.name {
        category.name = name;
    }
    if let Some(slug) = changes.slug {
        category.slug = slug;
    }
    category.updated_at = Utc::now();
}

fn apply_item_changes(item: &mut Item, changes: ItemChanges) {
    if let Some(category_id) = changes.category_id {
        item.category_id = category_id;
    }
    if let Some(name_en) = changes.name_en {
        item.name_en = name_en;
    }
    if let Some(name_ar) = changes.name_ar {
        item.name_ar = name_ar;
    }
    if let Some(description) = changes.description {
        item.description = description;
    }
    if let Some(price) = changes.price {
        item.price = price;
    }
    if let Some(image_url) = changes.image_url {
        item.image_url = image_url;
    }
    if let Some(is_featured) = changes.is_featured {
        item.is_featured = is_featured;
    }
    item.updated_at = Utc::now();
}

#[async_trait]
impl MenuRepository for MemoryMenuRepository {
    async fn list_categories_with_items(&self) -> Result<Vec<(Category, Vec<Item>)>> {
        store_unavailable(&self.unavailable)?;
        let state = self.state.lock().unwrap();
        Ok(group_items(state.categories.clone(), state.items.clone()))
    }

    async fn count_categories(&self) -> Result<i64> {
        store_unavailable(&self.unavailable)?;
        Ok(self.state.lock().unwrap().categories.len() as i64)
    }

    async fn create_category(&self, category: NewCategory) -> Result<Category> {
        store_unavailable(&self.unavailable)?;
        let mut state = self.state.lock().unwrap();
        if state.categories.iter().any(|c| c.slug == category.slug) {
            return Err(slug_conflict());
        }

        let now = Utc::now();
        let created = Category {
            id: Uuid::new_v4(),
            name: category.name,
            slug: category.slug,
            created_at: now,
            updated_at: now,
        };
        state.categories.push(created.clone());
        Ok(created)
    }

    async fn update_category(&self, id: Uuid, changes: CategoryChanges) -> Result<Category> {
        store_unavailable(&self.unavailable)?;
        let mut state = self.state.lock().unwrap();
        if let Some(slug) = &changes.slug {
            if state.categories.iter().any(|c| c.id != id && &c.slug == slug) {
                return Err(slug_conflict());
            }
        }

        let category = state
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Category with id {} not found", id)))?;
        apply_category_changes(category, changes);
        Ok(category.clone())
    }

    async fn delete_category(&self, id: Uuid) -> Result<()> {
        store_unavailable(&self.unavailable)?;
        let mut state = self.state.lock().unwrap();
        let before = state.categories.len();
        state.categories.retain(|c| c.id != id);
        if state.categories.len() == before {
            return Err(AppError::NotFound(format!(
                "Category with id {} not found",
                id
            )));
        }
        state.items.retain(|i| i.category_id != id);
        Ok(())
    }

    async fn create_item(&self, item: NewItem) -> Result<Item> {
        store_unavailable(&self.unavailable)?;
        let mut state = self.state.lock().unwrap();
        if !state.categories.iter().any(|c| c.id == item.category_id) {
            return Err(missing_reference());
        }

        let now = Utc::now();
        let created = Item {
            id: Uuid::new_v4(),
            category_id: item.category_id,
            name_en: item.name_en,
            name_ar: item.name_ar,
            description: item.description,
            price: item.price,
            image_url: item.image_url,
            is_featured: item.is_featured,
            created_at: now,
            updated_at: now,
        };
        state.items.push(created.clone());
        Ok(created)
    }

    async fn update_item(&self, id: Uuid, changes: ItemChanges) -> Result<Item> {
        store_unavailable(&self.unavailable)?;
        let mut state = self.state.lock().unwrap();
        if let Some(category_id) = changes.category_id {
            if !state.categories.iter().any(|c| c.id == category_id) {
                return Err(missing_reference());
            }
        }

        let item = state
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Item with id {} not found", id)))?;
        apply_item_changes(item, changes);
        Ok(item.clone())
    }

    async fn delete_item(&self, id: Uuid) -> Result<()> {
        store_unavailable(&self.unavailable)?;
        let mut state = self.state.lock().unwrap();
        let before = state.items.len();
        state.items.retain(|i| i.id != id);
        if state.items.len() == before {
            return Err(AppError::NotFound(format!("Item with id {} not found", id)));
        }
        Ok(())
    }
}

pub fn test_config() -> Config {
    Config {
        app: AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_allowed_origins: vec!["*".to_string()],
            max_request_body_size: 1024 * 1024,
            static_dir: "public".to_string(),
            seed_on_startup: false,
        },
        database: DatabaseConfig {
            url: "postgres://unused".to_string(),
            max_connections: 1,
            min_connections: 0,
            acquire_timeout_secs: 1,
            idle_timeout_secs: 1,
            max_lifetime_secs: 1,
        },
        session: SessionConfig {
            secret: "test-session-secret".to_string(),
            ttl: Duration::from_secs(3600),
            cookie_name: "menu_session".to_string(),
            cookie_secure: false,
        },
        admin: AdminConfig {
            username: TEST_ADMIN_USERNAME.to_string(),
            password: TEST_ADMIN_PASSWORD.to_string(),
        },
        swagger: SwaggerConfig {
            username: None,
            password: None,
            title: "Menu API".to_string(),
            version: "test".to_string(),
            description: "test".to_string(),
        },
    }
}

/// Full router over in-memory stores, with one admin account and cookie saving on
pub struct TestApp {
    pub server: TestServer,
    pub menu: Arc<MemoryMenuRepository>,
    pub sessions: Arc<MemorySessionStore>,
}

impl TestApp {
    pub async fn new() -> Self {
        let config = test_config();

        let users = Arc::new(MemoryUserRepository::default());
        users
            .create(TEST_ADMIN_USERNAME, &hash_password(TEST_ADMIN_PASSWORD).unwrap())
            .await
            .unwrap();
        let sessions = Arc::new(MemorySessionStore::default());
        let menu = Arc::new(MemoryMenuRepository::default());

        let services = AppServices {
            auth: Arc::new(AuthService::new(
                users,
                sessions.clone(),
                config.session.ttl,
            )),
            menu: Arc::new(MenuService::new(menu.clone())),
            categories: Arc::new(CategoryService::new(menu.clone())),
            items: Arc::new(ItemService::new(menu.clone())),
        };

        let server = TestServer::builder()
            .save_cookies()
            .build(build_router(services, &config))
            .unwrap();

        Self {
            server,
            menu,
            sessions,
        }
    }

    pub async fn login(&self) {
        self.server
            .post("/api/login")
            .json(&serde_json::json!({
                "username": TEST_ADMIN_USERNAME,
                "password": TEST_ADMIN_PASSWORD,
            }))
            .await
            .assert_status_ok();
    }
}
