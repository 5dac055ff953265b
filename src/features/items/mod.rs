//! Admin CRUD for menu items.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/items` | Yes | Create an item in a category |
//! | PUT | `/api/items/{id}` | Yes | Partially update an item |
//! | DELETE | `/api/items/{id}` | Yes | Delete an item |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ItemService;
