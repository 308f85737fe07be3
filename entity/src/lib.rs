//! `SeaORM` entities for the carbonserver user store.

pub mod prelude;

pub mod experiment;
pub mod membership;
pub mod organization;
pub mod project;
pub mod user;
