//! Public records exchanged with the request layer and database model aliases.

pub mod api;
pub mod db;
pub mod user;
