//! Test fixture modules for database record creation.
//!
//! - `user` - Users and organization memberships
//! - `organization` - Organizations with their projects and experiments
//! - `factory` - In-memory models for tests that never touch the database

pub mod factory;
pub mod organization;
pub mod user;
