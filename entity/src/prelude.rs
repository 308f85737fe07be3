pub use super::experiment::Entity as Experiment;
pub use super::membership::Entity as Membership;
pub use super::organization::Entity as Organization;
pub use super::project::Entity as Project;
pub use super::user::Entity as User;
