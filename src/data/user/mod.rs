//! User repository: lifecycle, memberships and authorization lookups.

use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, JoinType,
    ModelTrait, QueryFilter, QuerySelect, RelationTrait,
};
use uuid::Uuid;

use crate::{
    error::{user::UserError, Error},
    model::{
        db::UserModel,
        user::{UserAutoCreate, UserDto},
    },
};

#[cfg(test)]
mod tests;

/// User lifecycle and membership/authorization queries.
///
/// Every method runs against the borrowed connection, so passing a
/// `DatabaseTransaction` instead of the pool scopes the calls to that transaction.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new active user with no organizations
    ///
    /// No uniqueness check is made on ID or email here; a duplicate primary key
    /// surfaces as [`Error::DbErr`].
    pub async fn create_user(&self, user: UserAutoCreate) -> Result<UserDto, Error> {
        let user = entity::user::ActiveModel {
            id: ActiveValue::Set(user.id),
            name: ActiveValue::Set(user.name),
            email: ActiveValue::Set(user.email),
            is_active: ActiveValue::Set(true),
        };

        let user = user.insert(self.db).await?;

        Ok(UserDto::from_model(user, Vec::new()))
    }

    /// Finds a user by ID
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The user with their organization IDs
    /// - `Err(Error::UserError(UserError::NotFound))` - No user has this ID
    /// - `Err(Error::DbErr)` - The query failed
    pub async fn get_user_by_id(&self, user_id: Uuid) -> Result<UserDto, Error> {
        let Some(user) = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?
        else {
            tracing::debug!(user_id = %user_id, "No user found for ID");

            return Err(UserError::NotFound(user_id.to_string()).into());
        };

        self.with_memberships(user).await
    }

    /// Finds a user by email
    ///
    /// Emails are not unique; when several users share one, the first row the
    /// store returns wins.
    pub async fn get_user_by_email(&self, email: &str) -> Result<UserDto, Error> {
        let Some(user) = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?
        else {
            tracing::debug!(email = %email, "No user found for email");

            return Err(UserError::NotFound(email.to_string()).into());
        };

        self.with_memberships(user).await
    }

    /// Lists every user, an empty store yields an empty list
    pub async fn list_users(&self) -> Result<Vec<UserDto>, Error> {
        let users = entity::prelude::User::find()
            .find_with_related(entity::prelude::Membership)
            .all(self.db)
            .await?;

        Ok(users
            .into_iter()
            .map(|(user, memberships)| UserDto::from_model(user, memberships))
            .collect())
    }

    /// Makes the user an admin member of the organization unless already a member
    ///
    /// The insert is a single `ON CONFLICT DO NOTHING` statement, an existing
    /// membership keeps its admin flag.
    ///
    /// # Returns
    /// - `Ok(true)` - A new membership was created
    /// - `Ok(false)` - The user was already a member
    /// - `Err(Error::DbErr)` - The user or organization does not exist, or the query failed
    pub async fn subscribe_user_to_organization(
        &self,
        user: &UserDto,
        organization_id: Uuid,
    ) -> Result<bool, Error> {
        // Every subscription grants admin, there is no invite flow yet
        let membership = entity::membership::ActiveModel {
            user_id: ActiveValue::Set(user.id),
            organization_id: ActiveValue::Set(organization_id),
            is_admin: ActiveValue::Set(true),
        };

        let rows_affected = entity::prelude::Membership::insert(membership)
            .on_conflict(
                OnConflict::columns([
                    entity::membership::Column::UserId,
                    entity::membership::Column::OrganizationId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        let created = rows_affected > 0;
        if created {
            tracing::debug!(
                user_id = %user.id,
                organization_id = %organization_id,
                "Subscribed user to organization"
            );
        }

        Ok(created)
    }

    /// Checks whether the user is a member of the organization
    ///
    /// An absent user is never a member. When `is_admin` is given, only
    /// memberships with that admin flag count.
    pub async fn is_user_in_organization(
        &self,
        organization_id: Uuid,
        user: Option<&UserDto>,
        is_admin: Option<bool>,
    ) -> Result<bool, Error> {
        let Some(user) = user else {
            return Ok(false);
        };

        let mut query = entity::prelude::Membership::find()
            .filter(entity::membership::Column::UserId.eq(user.id))
            .filter(entity::membership::Column::OrganizationId.eq(organization_id));

        if let Some(is_admin) = is_admin {
            query = query.filter(entity::membership::Column::IsAdmin.eq(is_admin));
        }

        Ok(query.one(self.db).await?.is_some())
    }

    /// Checks whether the user is an admin member of the organization
    pub async fn is_admin_in_organization(
        &self,
        organization_id: Uuid,
        user: Option<&UserDto>,
    ) -> Result<bool, Error> {
        self.is_user_in_organization(organization_id, user, Some(true))
            .await
    }

    /// Checks whether the user is a member of the organization owning the project
    pub async fn is_user_authorized_on_project(
        &self,
        project_id: Uuid,
        user_id: Uuid,
    ) -> Result<bool, Error> {
        let membership = entity::prelude::Membership::find()
            .join(
                JoinType::InnerJoin,
                entity::membership::Relation::Organization.def(),
            )
            .join(
                JoinType::InnerJoin,
                entity::organization::Relation::Project.def(),
            )
            .filter(entity::membership::Column::UserId.eq(user_id))
            .filter(entity::project::Column::Id.eq(project_id))
            .one(self.db)
            .await?;

        Ok(membership.is_some())
    }

    /// Checks whether the user is a member of the organization owning the
    /// experiment's project
    pub async fn is_user_authorized_on_experiment(
        &self,
        experiment_id: Uuid,
        user_id: Uuid,
    ) -> Result<bool, Error> {
        let membership = entity::prelude::Membership::find()
            .join(
                JoinType::InnerJoin,
                entity::membership::Relation::Organization.def(),
            )
            .join(
                JoinType::InnerJoin,
                entity::organization::Relation::Project.def(),
            )
            .join(
                JoinType::InnerJoin,
                entity::project::Relation::Experiment.def(),
            )
            .filter(entity::membership::Column::UserId.eq(user_id))
            .filter(entity::experiment::Column::Id.eq(experiment_id))
            .one(self.db)
            .await?;

        Ok(membership.is_some())
    }

    async fn with_memberships(&self, user: UserModel) -> Result<UserDto, Error> {
        let memberships = user
            .find_related(entity::prelude::Membership)
            .all(self.db)
            .await?;

        Ok(UserDto::from_model(user, memberships))
    }
}
