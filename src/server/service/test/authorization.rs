use super::*;

/// Tests the role each operation declares.
#[test]
fn operations_declare_roles() {
    assert_eq!(Operation::List.required_role(), Role::User);
    assert_eq!(Operation::Get.required_role(), Role::User);
    assert_eq!(Operation::Create.required_role(), Role::Admin);
    assert_eq!(Operation::Update.required_role(), Role::Admin);
    assert_eq!(Operation::Delete.required_role(), Role::Admin);
}

fn is_forbidden(err: &AppError, role: Role) -> bool {
    matches!(err, AppError::AuthErr(AuthError::Forbidden { required }) if *required == role)
}

/// Tests that a user grant cannot run admin operations.
///
/// Expected: Err(Forbidden) for create, update and delete with zero store calls
#[tokio::test]
async fn user_grant_cannot_mutate() {
    let store = MemoryStore::with_records([article(7, "A")]);
    let service = ResourceService::<Article>::new(&store);
    let user = grant(Role::User);

    let create = service
        .create(
            user,
            CreateArticleParams {
                title: "T".to_string(),
                url: "U".to_string(),
                explanation: "E".to_string(),
                email: "M".to_string(),
                date_added: "2022-01-03T00:00:00".parse().unwrap(),
            },
        )
        .await
        .unwrap_err();
    let update = service
        .update(user, &7, article(7, "B"))
        .await
        .unwrap_err();
    let delete = service.delete(user, &7).await.unwrap_err();

    assert!(is_forbidden(&create, Role::Admin));
    assert!(is_forbidden(&update, Role::Admin));
    assert!(is_forbidden(&delete, Role::Admin));
    assert!(store.calls().is_empty());
}

/// Tests that an admin grant does not stand in for a user grant.
///
/// Expected: Err(Forbidden) for list and get with zero store calls
#[tokio::test]
async fn admin_grant_cannot_read() {
    let store = MemoryStore::with_records([article(7, "A")]);
    let service = ResourceService::<Article>::new(&store);
    let admin = grant(Role::Admin);

    let list = service.list(admin).await.unwrap_err();
    let get = service.get_by_key(admin, &7).await.unwrap_err();

    assert!(is_forbidden(&list, Role::User));
    assert!(is_forbidden(&get, Role::User));
    assert!(store.calls().is_empty());
}
