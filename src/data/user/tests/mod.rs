mod list_users;
mod subscribe_user_to_organization;

use carbonserver_test_utils::prelude::*;
use uuid::Uuid;

use crate::{
    data::user::UserRepository,
    error::{user::UserError, Error},
    model::user::{UserAutoCreate, UserDto},
};

fn user_input(user_id: Uuid, email: &str) -> UserAutoCreate {
    UserAutoCreate {
        id: user_id,
        name: "Ada Lovelace".to_string(),
        email: email.to_string(),
    }
}
