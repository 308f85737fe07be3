//! Placeholder values shared by fixtures and factories.

/// Connection URL for the per-test in-memory SQLite database.
pub static TEST_DATABASE_URL: &str = "sqlite::memory:";

/// Display name given to every fixture user.
pub static TEST_USER_NAME: &str = "Test User";

pub static TEST_ORGANIZATION_NAME: &str = "Test Organization";

pub static TEST_PROJECT_NAME: &str = "Test Project";

pub static TEST_EXPERIMENT_NAME: &str = "Test Experiment";
