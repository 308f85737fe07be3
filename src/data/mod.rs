//! Data access layer repositories.
//!
//! Repositories run SeaORM queries against any `ConnectionTrait` implementor
//! and map rows onto the public records in `crate::model`.

pub mod user;
