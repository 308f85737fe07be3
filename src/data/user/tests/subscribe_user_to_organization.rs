use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

use super::*;

async fn memberships_for(
    test: &TestContext,
    user_id: Uuid,
    organization_id: Uuid,
) -> Result<Vec<entity::membership::Model>, TestError> {
    Ok(entity::prelude::Membership::find()
        .filter(entity::membership::Column::UserId.eq(user_id))
        .filter(entity::membership::Column::OrganizationId.eq(organization_id))
        .all(&test.db)
        .await?)
}

/// Expect Ok(true) and an admin membership for a new subscription
#[tokio::test]
async fn creates_admin_membership() -> Result<(), TestError> {
    let user_id = Uuid::from_u128(1);
    let organization_id = Uuid::from_u128(10);
    let test = TestBuilder::new()
        .with_user_tables()
        .with_organization(organization_id)
        .build()
        .await?;

    let user_repo = UserRepository::new(&test.db);
    let user = user_repo
        .create_user(user_input(user_id, "a@x.com"))
        .await
        .unwrap();
    let result = user_repo
        .subscribe_user_to_organization(&user, organization_id)
        .await;

    assert!(matches!(result, Ok(true)), "Result: {:?}", result);
    let memberships = memberships_for(&test, user_id, organization_id).await?;
    assert_eq!(memberships.len(), 1);
    assert!(memberships[0].is_admin);

    Ok(())
}

/// Expect exactly one admin membership after subscribing twice
#[tokio::test]
async fn is_idempotent() -> Result<(), TestError> {
    let user_id = Uuid::from_u128(1);
    let organization_id = Uuid::from_u128(10);
    let test = TestBuilder::new()
        .with_user_tables()
        .with_organization(organization_id)
        .with_user(user_id, "a@x.com")
        .build()
        .await?;

    let user_repo = UserRepository::new(&test.db);
    let user = user_repo.get_user_by_id(user_id).await.unwrap();
    let first = user_repo
        .subscribe_user_to_organization(&user, organization_id)
        .await;
    let second = user_repo
        .subscribe_user_to_organization(&user, organization_id)
        .await;

    assert!(matches!(first, Ok(true)), "Result: {:?}", first);
    assert!(matches!(second, Ok(false)), "Result: {:?}", second);
    let memberships = memberships_for(&test, user_id, organization_id).await?;
    assert_eq!(memberships.len(), 1);
    assert!(memberships[0].is_admin);

    Ok(())
}

/// Expect an existing non-admin membership to be left untouched
#[tokio::test]
async fn keeps_existing_membership() -> Result<(), TestError> {
    let user_id = Uuid::from_u128(1);
    let organization_id = Uuid::from_u128(10);
    let test = TestBuilder::new()
        .with_user_tables()
        .with_organization(organization_id)
        .with_user(user_id, "a@x.com")
        .with_membership(user_id, organization_id, false)
        .build()
        .await?;

    let user_repo = UserRepository::new(&test.db);
    let user = user_repo.get_user_by_id(user_id).await.unwrap();
    let result = user_repo
        .subscribe_user_to_organization(&user, organization_id)
        .await;

    assert!(matches!(result, Ok(false)), "Result: {:?}", result);
    let memberships = memberships_for(&test, user_id, organization_id).await?;
    assert_eq!(memberships.len(), 1);
    assert!(!memberships[0].is_admin);

    Ok(())
}

/// Expect the new organization to show up on the user's record
#[tokio::test]
async fn adds_organization_to_user_record() -> Result<(), TestError> {
    let user_id = Uuid::from_u128(1);
    let organization_id = Uuid::from_u128(10);
    let test = TestBuilder::new()
        .with_user_tables()
        .with_organization(organization_id)
        .with_user(user_id, "a@x.com")
        .build()
        .await?;

    let user_repo = UserRepository::new(&test.db);
    let user = user_repo.get_user_by_id(user_id).await.unwrap();
    user_repo
        .subscribe_user_to_organization(&user, organization_id)
        .await
        .unwrap();
    let user = user_repo.get_user_by_id(user_id).await.unwrap();

    assert_eq!(user.organizations, vec![organization_id]);

    Ok(())
}

/// Expect Error::DbErr when the organization does not exist
#[tokio::test]
async fn fails_for_nonexistent_organization() -> Result<(), TestError> {
    let user_id = Uuid::from_u128(1);
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user(user_id, "a@x.com")
        .build()
        .await?;

    let user_repo = UserRepository::new(&test.db);
    let user = user_repo.get_user_by_id(user_id).await.unwrap();
    let result = user_repo
        .subscribe_user_to_organization(&user, Uuid::from_u128(10))
        .await;

    assert!(matches!(result, Err(Error::DbErr(_))));

    Ok(())
}

/// Expect Error::DbErr when the user record was never stored
#[tokio::test]
async fn fails_for_unsaved_user() -> Result<(), TestError> {
    let organization_id = Uuid::from_u128(10);
    let test = TestBuilder::new()
        .with_user_tables()
        .with_organization(organization_id)
        .build()
        .await?;
    let unsaved_user = UserDto::from_model(
        factory::mock_user_model(Uuid::from_u128(1), "a@x.com"),
        Vec::new(),
    );

    let user_repo = UserRepository::new(&test.db);
    let result = user_repo
        .subscribe_user_to_organization(&unsaved_user, organization_id)
        .await;

    assert!(matches!(result, Err(Error::DbErr(_))));

    Ok(())
}
