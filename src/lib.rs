//! User, organization membership and authorization store for the carbonserver API.
//!
//! The crate maps relational rows to public user records and answers the
//! authorization questions the request handlers ask: is a user a member or
//! admin of an organization, and may a user act on a project or experiment.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod model;
pub mod service;
pub mod startup;
