//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};
use uuid::Uuid;

use crate::{error::TestError, setup::user_table_statements, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables
/// and fixture rows. Methods can be chained together and finalized with `build()`
/// to create a complete test setup.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_user_tables: bool,

    // Database fixtures to insert
    organizations: Vec<Uuid>,
    users: Vec<(Uuid, String)>,              // (user_id, email)
    memberships: Vec<(Uuid, Uuid, bool)>,    // (user_id, organization_id, is_admin)
    projects: Vec<(Uuid, Uuid)>,             // (project_id, organization_id)
    experiments: Vec<(Uuid, Uuid)>,          // (experiment_id, project_id)
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    ///
    /// # Returns
    /// - `TestBuilder` - A new builder instance ready for configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_user_tables: false,
            organizations: Vec::new(),
            users: Vec::new(),
            memberships: Vec::new(),
            projects: Vec::new(),
            experiments: Vec::new(),
        }
    }

    /// Add the user store tables to the test database.
    ///
    /// Creates Organization, User, Membership, Project and Experiment tables.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_user_tables(mut self) -> Self {
        self.include_user_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Arguments
    /// - `entity` - Entity type implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```no_run
    /// use carbonserver_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), carbonserver_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Organization)
    ///     .with_table(User)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert mock organization into database.
    pub fn with_organization(mut self, organization_id: Uuid) -> Self {
        self.organizations.push(organization_id);
        self
    }

    /// Insert mock user into database.
    ///
    /// # Arguments
    /// - `user_id` - Caller-chosen user ID
    /// - `email` - Email address of the user
    pub fn with_user(mut self, user_id: Uuid, email: impl Into<String>) -> Self {
        self.users.push((user_id, email.into()));
        self
    }

    /// Insert a membership between a queued user and a queued organization.
    ///
    /// Both the user and the organization must be added with `with_user` and
    /// `with_organization`, otherwise the foreign keys reject the row during `build()`.
    pub fn with_membership(mut self, user_id: Uuid, organization_id: Uuid, is_admin: bool) -> Self {
        self.memberships.push((user_id, organization_id, is_admin));
        self
    }

    /// Insert mock project owned by a queued organization.
    pub fn with_project(mut self, project_id: Uuid, organization_id: Uuid) -> Self {
        self.projects.push((project_id, organization_id));
        self
    }

    /// Insert mock experiment belonging to a queued project.
    pub fn with_experiment(mut self, experiment_id: Uuid, project_id: Uuid) -> Self {
        self.experiments.push((experiment_id, project_id));
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (user tables if specified, then custom tables)
    /// 2. Inserts fixtures parents first (organizations, users, memberships, projects, experiments)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_user_tables {
            all_tables.extend(user_table_statements());
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for organization_id in self.organizations {
            setup
                .organization()
                .insert_organization(organization_id)
                .await?;
        }

        for (user_id, email) in self.users {
            setup.user().insert_user(user_id, &email).await?;
        }

        for (user_id, organization_id, is_admin) in self.memberships {
            setup
                .user()
                .insert_membership(user_id, organization_id, is_admin)
                .await?;
        }

        for (project_id, organization_id) in self.projects {
            setup
                .organization()
                .insert_project(project_id, organization_id)
                .await?;
        }

        for (experiment_id, project_id) in self.experiments {
            setup
                .organization()
                .insert_experiment(experiment_id, project_id)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{EntityTrait, PaginatorTrait};

    use super::*;

    #[tokio::test]
    async fn test_builder_creates_user_tables() {
        let result = TestBuilder::new().with_user_tables().build().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_builder_chains_methods() -> Result<(), TestError> {
        let user_id = Uuid::from_u128(1);
        let organization_id = Uuid::from_u128(10);
        let project_id = Uuid::from_u128(100);

        let test = TestBuilder::new()
            .with_user_tables()
            .with_organization(organization_id)
            .with_user(user_id, "user@example.com")
            .with_membership(user_id, organization_id, false)
            .with_project(project_id, organization_id)
            .with_experiment(Uuid::from_u128(1000), project_id)
            .build()
            .await?;

        assert_eq!(entity::prelude::Membership::find().count(&test.db).await?, 1);
        assert_eq!(entity::prelude::Experiment::find().count(&test.db).await?, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_builder_rejects_orphan_membership() {
        let result = TestBuilder::new()
            .with_user_tables()
            .with_user(Uuid::from_u128(1), "user@example.com")
            .with_membership(Uuid::from_u128(1), Uuid::from_u128(10), true)
            .build()
            .await;

        assert!(result.is_err());
    }
}
