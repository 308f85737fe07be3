
use carbonserver_test_utils::prelude::*;
use uuid::Uuid;

use crate::{error::Error, model::user::UserAutoCreate, service::user::UserService};
