use std::sync::Arc;
use std::time::Duration;

use lazy_static::lazy_static;

use crate::core::error::{AppError, Result};
use crate::features::auth::dtos::LoginRequestDto;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::auth::password::{hash_password, verify_password};
use crate::features::auth::session_store::{Session, SessionStore};
use crate::features::users::UserRepository;

lazy_static! {
    /// Verified in place of a real hash when the username is unknown
    static ref DUMMY_HASH: String =
        hash_password("no-such-user-placeholder").unwrap_or_default();
}

/// Service for login, logout and session resolution
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    sessions: Arc<dyn SessionStore>,
    session_ttl: Duration,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        sessions: Arc<dyn SessionStore>,
        session_ttl: Duration,
    ) -> Self {
        Self {
            users,
            sessions,
            session_ttl,
        }
    }

    /// Verify credentials and open a session.
    ///
    /// Unknown usernames and wrong passwords produce the same error.
    pub async fn login(&self, dto: LoginRequestDto) -> Result<Session> {
        let user = self.users.find_by_username(&dto.username).await?;

        // Unknown usernames still pay for a full verification
        let password = dto.password;
        let hash = match &user {
            Some(user) => user.password_hash.clone(),
            None => DUMMY_HASH.clone(),
        };
        let matches = tokio::task::spawn_blocking(move || verify_password(&password, &hash))
            .await
            .map_err(|e| AppError::Internal(format!("Password verification task failed: {}", e)))?;

        let Some(user) = user.filter(|_| matches) else {
            tracing::warn!("Failed login attempt for user '{}'", dto.username);
            return Err(invalid_credentials());
        };

        match self.sessions.purge_expired().await {
            Ok(0) => {}
            Ok(purged) => tracing::debug!("Purged {} expired sessions", purged),
            Err(e) => tracing::warn!("Failed to purge expired sessions: {}", e),
        }

        let session = self.sessions.create(user.id, self.session_ttl).await?;
        tracing::info!("User '{}' logged in", user.username);

        Ok(session)
    }

    /// Destroy a session. Without a token there is nothing to tear down.
    pub async fn logout(&self, token: Option<&str>) -> Result<()> {
        if let Some(token) = token {
            self.sessions.delete(token).await?;
        }
        Ok(())
    }

    /// Resolve a session token to the administrator it belongs to.
    pub async fn authenticate(&self, token: &str) -> Result<Option<AuthenticatedUser>> {
        let Some(session) = self.sessions.find_valid(token).await? else {
            return Ok(None);
        };

        let user = self.users.find_by_id(session.user_id).await?;

        Ok(user.map(|u| AuthenticatedUser {
            user_id: u.id,
            username: u.username,
        }))
    }
}

fn invalid_credentials() -> AppError {
    AppError::Unauthorized("Invalid credentials".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{MemorySessionStore, MemoryUserRepository};

    async fn service_with_admin(password: &str) -> (AuthService, Arc<MemorySessionStore>) {
        let users = Arc::new(MemoryUserRepository::default());
        users
            .create("Admin", &crate::features::auth::hash_password(password).unwrap())
            .await
            .unwrap();
        let sessions = Arc::new(MemorySessionStore::default());
        let service = AuthService::new(users, sessions.clone(), Duration::from_secs(3600));
        (service, sessions)
    }

    fn login_dto(username: &str, password: &str) -> LoginRequestDto {
        LoginRequestDto {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_opens_session_for_valid_credentials() {
        let (service, sessions) = service_with_admin("pw").await;

        let session = service.login(login_dto("Admin", "pw")).await.unwrap();

        assert_eq!(sessions.len(), 1);
        let user = service.authenticate(&session.token).await.unwrap().unwrap();
        assert_eq!(user.username, "Admin");
    }

    #[tokio::test]
    async fn test_login_rejects_wrong_password_and_unknown_user() {
        let (service, sessions) = service_with_admin("pw").await;

        let wrong = service.login(login_dto("Admin", "nope")).await;
        assert!(matches!(wrong, Err(AppError::Unauthorized(_))));

        let unknown = service.login(login_dto("Ghost", "pw")).await;
        assert!(matches!(unknown, Err(AppError::Unauthorized(_))));

        assert_eq!(sessions.len(), 0);
    }

    #[test]
    fn test_unknown_users_are_verified_against_a_real_hash() {
        assert!(DUMMY_HASH.starts_with("$argon2id$"));
        assert!(!verify_password("wrong", &DUMMY_HASH));
    }

    #[tokio::test]
    async fn test_logout_invalidates_session() {
        let (service, _) = service_with_admin("pw").await;
        let session = service.login(login_dto("Admin", "pw")).await.unwrap();

        service.logout(Some(&session.token)).await.unwrap();

        assert!(service.authenticate(&session.token).await.unwrap().is_none());
        // Logging out twice, or without a token, is harmless
        service.logout(Some(&session.token)).await.unwrap();
        service.logout(None).await.unwrap();
    }

    #[tokio::test]
    async fn test_expired_session_is_rejected() {
        let users = Arc::new(MemoryUserRepository::default());
        let admin = users.create("Admin", "unused-hash").await.unwrap();
        let sessions = Arc::new(MemorySessionStore::default());
        let service = AuthService::new(users, sessions.clone(), Duration::from_secs(3600));

        let session = sessions.create(admin.id, Duration::ZERO).await.unwrap();

        assert!(service.authenticate(&session.token).await.unwrap().is_none());
        assert_eq!(sessions.len(), 0);
    }
}
