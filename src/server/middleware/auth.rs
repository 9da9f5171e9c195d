use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// Resolves the caller of a request from its session.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Returns the logged in user, if any.
    ///
    /// A session pointing at a user that no longer exists counts as anonymous.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Session belongs to an existing user
    /// - `Ok(None)` - Anonymous caller
    /// - `Err(AppError)` - Session or database failure
    pub async fn current(&self) -> Result<Option<User>, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Ok(None);
        };

        let user = UserRepository::new(self.db).find_by_id(user_id).await?;
        if user.is_none() {
            tracing::debug!("User {} from session not found in database", user_id);
        }

        Ok(user)
    }

    /// Returns the logged in user or fails with an authentication error.
    ///
    /// # Returns
    /// - `Ok(User)` - Session belongs to an existing user
    /// - `Err(AuthError::NotAuthenticated)` - No user in session
    /// - `Err(AuthError::UserNotInDatabase)` - Session user was deleted
    pub async fn require(&self) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::NotAuthenticated.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        Ok(user)
    }
}
