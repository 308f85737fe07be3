//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main carbonserver crate to keep test
//! signatures consistent across crates.

pub type UserModel = entity::user::Model;

pub type MembershipModel = entity::membership::Model;

pub type OrganizationModel = entity::organization::Model;

pub type ProjectModel = entity::project::Model;

pub type ExperimentModel = entity::experiment::Model;
