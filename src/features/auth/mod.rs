//! Session-based administrator authentication.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/login` | No | Verify credentials and open a session |
//! | POST | `/api/logout` | No | Destroy the current session |
//! | GET | `/api/check-auth` | No | Report whether the caller is logged in |
//!
//! A login stores a server-side session and hands the client its token in a
//! signed, HttpOnly cookie. Protected routes are wrapped in
//! [`crate::core::middleware::session_middleware`].

mod cookies;
mod password;

pub mod dtos;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod services;
pub mod session_store;

pub use cookies::{AuthState, SessionCookies};
pub use password::{hash_password, verify_password};
pub use services::AuthService;
pub use session_store::{PgSessionStore, SessionStore};
