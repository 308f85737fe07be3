//! User records.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::db::{MembershipModel, UserModel};

/// Input for provisioning a user on first contact.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserAutoCreate {
    /// Identifier chosen by the caller, usually taken from the identity provider
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
}

/// Public user record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    /// User identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Whether the account is active
    pub is_active: bool,
    /// Organizations the user is a member of, ascending
    pub organizations: Vec<Uuid>,
}

impl UserDto {
    /// Project a stored user and its membership rows onto the public record.
    pub fn from_model(user: UserModel, memberships: Vec<MembershipModel>) -> Self {
        let mut organizations: Vec<Uuid> = memberships
            .into_iter()
            .map(|membership| membership.organization_id)
            .collect();
        organizations.sort_unstable();

        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            is_active: user.is_active,
            organizations,
        }
    }
}
