//! Service layer coordinating repository calls.

pub mod user;
