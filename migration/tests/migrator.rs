use migration::{Migrator, MigratorTrait, SchemaManager};
use sea_orm_migration::sea_orm::{Database, DatabaseConnection, DbErr};

const TABLES: [&str; 5] = [
    "organizations",
    "users",
    "memberships",
    "projects",
    "experiments",
];

async fn connect() -> Result<DatabaseConnection, DbErr> {
    Database::connect("sqlite::memory:").await
}

/// Expect every table to exist after applying all migrations
#[tokio::test]
async fn applies_all_migrations() -> Result<(), DbErr> {
    let db = connect().await?;

    Migrator::up(&db, None).await?;

    let manager = SchemaManager::new(&db);
    for table in TABLES {
        assert!(manager.has_table(table).await?, "missing table {table}");
    }
    assert!(Migrator::get_pending_migrations(&db).await?.is_empty());

    Ok(())
}

/// Expect every table to be dropped after reverting all migrations
#[tokio::test]
async fn reverts_all_migrations() -> Result<(), DbErr> {
    let db = connect().await?;

    Migrator::up(&db, None).await?;
    Migrator::down(&db, None).await?;

    let manager = SchemaManager::new(&db);
    for table in TABLES {
        assert!(!manager.has_table(table).await?, "table {table} still present");
    }
    assert_eq!(Migrator::get_pending_migrations(&db).await?.len(), TABLES.len());

    Ok(())
}
