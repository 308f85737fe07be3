use sea_orm::{ActiveValue, EntityTrait};
use uuid::Uuid;

use crate::{
    constant::{TEST_EXPERIMENT_NAME, TEST_ORGANIZATION_NAME, TEST_PROJECT_NAME},
    error::TestError,
    model::{ExperimentModel, OrganizationModel, ProjectModel},
    TestContext,
};

impl TestContext {
    pub fn organization<'a>(&'a self) -> OrganizationFixtures<'a> {
        OrganizationFixtures { setup: self }
    }
}

pub struct OrganizationFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> OrganizationFixtures<'a> {
    pub async fn insert_organization(
        &self,
        organization_id: Uuid,
    ) -> Result<OrganizationModel, TestError> {
        Ok(
            entity::prelude::Organization::insert(entity::organization::ActiveModel {
                id: ActiveValue::Set(organization_id),
                name: ActiveValue::Set(TEST_ORGANIZATION_NAME.to_string()),
                description: ActiveValue::Set(None),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a project owned by an existing organization.
    pub async fn insert_project(
        &self,
        project_id: Uuid,
        organization_id: Uuid,
    ) -> Result<ProjectModel, TestError> {
        Ok(
            entity::prelude::Project::insert(entity::project::ActiveModel {
                id: ActiveValue::Set(project_id),
                name: ActiveValue::Set(TEST_PROJECT_NAME.to_string()),
                description: ActiveValue::Set(None),
                organization_id: ActiveValue::Set(organization_id),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert an experiment belonging to an existing project.
    pub async fn insert_experiment(
        &self,
        experiment_id: Uuid,
        project_id: Uuid,
    ) -> Result<ExperimentModel, TestError> {
        Ok(
            entity::prelude::Experiment::insert(entity::experiment::ActiveModel {
                id: ActiveValue::Set(experiment_id),
                name: ActiveValue::Set(TEST_EXPERIMENT_NAME.to_string()),
                description: ActiveValue::Set(None),
                project_id: ActiveValue::Set(project_id),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert the full ownership chain organization -> project -> experiment.
    pub async fn insert_organization_with_experiment(
        &self,
        organization_id: Uuid,
        project_id: Uuid,
        experiment_id: Uuid,
    ) -> Result<(OrganizationModel, ProjectModel, ExperimentModel), TestError> {
        let organization_model = self.insert_organization(organization_id).await?;
        let project_model = self
            .insert_project(project_id, organization_model.id)
            .await?;
        let experiment_model = self
            .insert_experiment(experiment_id, project_model.id)
            .await?;

        Ok((organization_model, project_model, experiment_model))
    }
}
