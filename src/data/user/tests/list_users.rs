use super::*;

/// Expect an empty list rather than an error for an empty store
#[tokio::test]
async fn returns_empty_list_for_empty_store() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;

    let user_repo = UserRepository::new(&test.db);
    let result = user_repo.list_users().await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert!(result.unwrap().is_empty());

    Ok(())
}

/// Expect every user mapped with their own organizations
#[tokio::test]
async fn returns_all_users_with_organizations() -> Result<(), TestError> {
    let member = Uuid::from_u128(1);
    let outsider = Uuid::from_u128(2);
    let organization_id = Uuid::from_u128(10);
    let test = TestBuilder::new()
        .with_user_tables()
        .with_organization(organization_id)
        .with_user(member, "member@x.com")
        .with_user(outsider, "outsider@x.com")
        .with_membership(member, organization_id, true)
        .build()
        .await?;

    let user_repo = UserRepository::new(&test.db);
    let users = user_repo.list_users().await.unwrap();

    assert_eq!(users.len(), 2);
    let member_dto = users.iter().find(|u| u.id == member).unwrap();
    let outsider_dto = users.iter().find(|u| u.id == outsider).unwrap();
    assert_eq!(member_dto.organizations, vec![organization_id]);
    assert!(outsider_dto.organizations.is_empty());

    Ok(())
}

/// Expect Error::DbErr when required database tables are not present
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let user_repo = UserRepository::new(&test.db);
    let result = user_repo.list_users().await;

    assert!(matches!(result, Err(Error::DbErr(_))));

    Ok(())
}
