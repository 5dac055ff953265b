//! Administrator credential store.
//!
//! Holds the single admin account created by the seeding routine. There is
//! no HTTP surface here: accounts are never created, updated or deleted
//! through the API.

pub mod models;
pub mod repository;

pub use models::User;
pub use repository::{PgUserRepository, UserRepository};
