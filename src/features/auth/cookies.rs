use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::{Cookie, Key, SameSite, SignedCookieJar};
use sha2::{Digest, Sha512};

use crate::core::config::SessionConfig;
use crate::features::auth::services::AuthService;

/// Session cookie settings plus the signing key derived from the session secret
#[derive(Clone)]
pub struct SessionCookies {
    pub name: String,
    pub secure: bool,
    key: Key,
}

impl SessionCookies {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            name: config.cookie_name.clone(),
            secure: config.cookie_secure,
            key: derive_key(&config.secret),
        }
    }

    pub fn key(&self) -> Key {
        self.key.clone()
    }

    /// Cookie carrying a freshly issued session token.
    ///
    /// No `Max-Age`: the browser drops it at shutdown and the server-side
    /// expiry bounds its lifetime either way.
    pub fn issue(&self, token: &str) -> Cookie<'static> {
        Cookie::build((self.name.clone(), token.to_string()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .build()
    }

    /// Removal cookie; path must match the issued one.
    pub fn removal(&self) -> Cookie<'static> {
        Cookie::build(self.name.clone()).path("/").build()
    }

    /// Session token from a verified (signature-checked) cookie.
    pub fn token(&self, jar: &SignedCookieJar) -> Option<String> {
        jar.get(&self.name).map(|c| c.value().to_string())
    }
}

/// Derive the 64-byte cookie signing key from an arbitrary-length secret.
fn derive_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(digest.as_slice())
}

/// State shared by the auth routes and the session middleware
#[derive(Clone)]
pub struct AuthState {
    pub service: Arc<AuthService>,
    pub cookies: SessionCookies,
}

impl AuthState {
    pub fn new(service: Arc<AuthService>, cookies: SessionCookies) -> Self {
        Self { service, cookies }
    }
}

impl FromRef<AuthState> for Key {
    fn from_ref(state: &AuthState) -> Self {
        state.cookies.key()
    }
}
