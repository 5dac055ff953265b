//! Admin CRUD for menu categories.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/categories` | Yes | Create a category |
//! | PUT | `/api/categories/{id}` | Yes | Partially update a category |
//! | DELETE | `/api/categories/{id}` | Yes | Delete a category and its items |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CategoryService;
