//! User service layer.
//!
//! Provisions users on first contact. The owning request layer calls this with
//! the identity it authenticated and gets back the stored record.

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::{user::UserError, Error},
    model::user::{UserAutoCreate, UserDto},
};

/// Service for user account operations.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the user with the provided ID, creating it if it does not exist yet.
    ///
    /// # Arguments
    /// - `user` - Identity of the user, its ID is the lookup key
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The existing or newly created user
    /// - `Err(Error::DbErr)` - The lookup or the insert failed
    pub async fn get_or_create_user(&self, user: UserAutoCreate) -> Result<UserDto, Error> {
        let user_repo = UserRepository::new(self.db);

        match user_repo.get_user_by_id(user.id).await {
            Ok(existing) => Ok(existing),
            Err(Error::UserError(UserError::NotFound(_))) => {
                let user_id = user.id;
                let created = user_repo.create_user(user).await?;

                tracing::info!(user_id = %user_id, "Provisioned new user");

                Ok(created)
            }
            Err(err) => Err(err),
        }
    }
}
