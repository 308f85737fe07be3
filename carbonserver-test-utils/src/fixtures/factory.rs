//! Factory functions for generating mock user database models.
//!
//! These are in-memory model instances that don't require database
//! interaction, suitable for unit tests of pure mapping code.

use uuid::Uuid;

use crate::{
    constant::TEST_USER_NAME,
    model::{MembershipModel, UserModel},
};

/// Create an active user model with the standard test name.
pub fn mock_user_model(user_id: Uuid, email: &str) -> UserModel {
    UserModel {
        id: user_id,
        name: TEST_USER_NAME.to_string(),
        email: email.to_string(),
        is_active: true,
    }
}

/// Create a membership model linking `user_id` to `organization_id`.
pub fn mock_membership_model(
    user_id: Uuid,
    organization_id: Uuid,
    is_admin: bool,
) -> MembershipModel {
    MembershipModel {
        user_id,
        organization_id,
        is_admin,
    }
}
