//! Database model type aliases.
//!
//! Convenient aliases for the SeaORM entity models so signatures across the
//! crate don't have to spell out the `entity` crate paths.

/// Type alias for the user database model.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key, supplied by the caller on creation
/// - `name` - Display name
/// - `email` - Email address, not unique
/// - `is_active` - Set on creation, never cleared by this crate
pub type UserModel = entity::user::Model;

/// Type alias for the membership database model.
///
/// # Fields (from `entity::membership::Model`)
/// - `user_id` - Member user, part of the composite primary key
/// - `organization_id` - Organization joined, part of the composite primary key
/// - `is_admin` - Whether the member administers the organization
pub type MembershipModel = entity::membership::Model;
