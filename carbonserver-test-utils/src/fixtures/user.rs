use sea_orm::{ActiveValue, EntityTrait};
use uuid::Uuid;

use crate::{
    constant::TEST_USER_NAME,
    error::TestError,
    model::{MembershipModel, OrganizationModel, UserModel},
    TestContext,
};

impl TestContext {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert an active user with the standard test name.
    pub async fn insert_user(&self, user_id: Uuid, email: &str) -> Result<UserModel, TestError> {
        Ok(
            entity::prelude::User::insert(entity::user::ActiveModel {
                id: ActiveValue::Set(user_id),
                name: ActiveValue::Set(TEST_USER_NAME.to_string()),
                email: ActiveValue::Set(email.to_string()),
                is_active: ActiveValue::Set(true),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a membership row directly, bypassing the repository's
    /// always-admin subscription path.
    pub async fn insert_membership(
        &self,
        user_id: Uuid,
        organization_id: Uuid,
        is_admin: bool,
    ) -> Result<MembershipModel, TestError> {
        Ok(
            entity::prelude::Membership::insert(entity::membership::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                organization_id: ActiveValue::Set(organization_id),
                is_admin: ActiveValue::Set(is_admin),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a user, an organization and a membership linking the two.
    pub async fn insert_user_with_organization(
        &self,
        user_id: Uuid,
        email: &str,
        organization_id: Uuid,
        is_admin: bool,
    ) -> Result<(UserModel, OrganizationModel, MembershipModel), TestError> {
        let organization_model = self
            .setup
            .organization()
            .insert_organization(organization_id)
            .await?;
        let user_model = self.insert_user(user_id, email).await?;
        let membership_model = self
            .insert_membership(user_model.id, organization_model.id, is_admin)
            .await?;

        Ok((user_model, organization_model, membership_model))
    }
}
