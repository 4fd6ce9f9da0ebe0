use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
};

/// The caller of a request as seen by identity-scoped filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identity {
    Anonymous,
    Authenticated { user_id: i32 },
}

impl Identity {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    /// Returns the caller's user id or fails with `AuthenticationRequired`.
    pub fn require_user_id(&self) -> Result<i32, AuthError> {
        match self {
            Self::Authenticated { user_id } => Ok(*user_id),
            Self::Anonymous => Err(AuthError::AuthenticationRequired),
        }
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the calling identity from the session.
    ///
    /// A session that references a user who no longer exists is treated as anonymous.
    pub async fn identity(&self) -> Result<Identity, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Ok(Identity::Anonymous);
        };

        if user_repo.find_by_id(user_id).await?.is_none() {
            tracing::debug!("Session references missing user {}", user_id);
            return Ok(Identity::Anonymous);
        }

        Ok(Identity::Authenticated { user_id })
    }
}
