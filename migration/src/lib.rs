pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_organizations_table;
mod m20240601_000002_create_users_table;
mod m20240601_000003_create_memberships_table;
mod m20240601_000004_create_projects_table;
mod m20240601_000005_create_experiments_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_organizations_table::Migration),
            Box::new(m20240601_000002_create_users_table::Migration),
            Box::new(m20240601_000003_create_memberships_table::Migration),
            Box::new(m20240601_000004_create_projects_table::Migration),
            Box::new(m20240601_000005_create_experiments_table::Migration),
        ]
    }
}
