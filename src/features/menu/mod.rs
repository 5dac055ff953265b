//! Public bilingual menu and the category/item store behind it.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/menu` | No | All categories with their nested items |

pub mod dtos;
pub mod handlers;
pub mod repository;
pub mod routes;
pub mod services;

pub use repository::{MenuRepository, PgMenuRepository};
pub use services::MenuService;
