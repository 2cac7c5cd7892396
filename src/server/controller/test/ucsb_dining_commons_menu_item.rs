use super::*;
use sea_orm::EntityTrait;

/// Tests that a logged-out caller is rejected on every operation.
///
/// Expected: 403 with empty body for list, get, create, update and delete
#[tokio::test]
async fn logged_out_caller_is_forbidden_everywhere() {
    let server = TestServer::start().await;

    assert_forbidden(server.get("/api/ucsbdiningcommonsmenuitems/all").await).await;
    assert_forbidden(server.get("/api/ucsbdiningcommonsmenuitems?id=1").await).await;
    assert_forbidden(server.post("/api/ucsbdiningcommonsmenuitems/post", &[]).await).await;
    assert_forbidden(
        server
            .put("/api/ucsbdiningcommonsmenuitems?id=1", &json!({}))
            .await,
    )
    .await;
    assert_forbidden(server.delete("/api/ucsbdiningcommonsmenuitems?id=1").await).await;
}

/// Tests that a regular user cannot create, update or delete.
///
/// Expected: 403 for each admin operation and the stored item unchanged
#[tokio::test]
async fn user_cannot_mutate_menu_items() {
    let server = TestServer::start().await;
    let item = factory::create_menu_item(&server.db).await.unwrap();
    server.login_user().await;

    let path = format!("/api/ucsbdiningcommonsmenuitems?id={}", item.id);
    assert_forbidden(
        server
            .post(
                "/api/ucsbdiningcommonsmenuitems/post",
                &[
                    ("diningCommonsCode", "ortega"),
                    ("name", "Chicken Caesar Salad"),
                    ("station", "Entrees"),
                ],
            )
            .await,
    )
    .await;
    assert_forbidden(
        server
            .put(
                &path,
                &json!({
                    "diningCommonsCode": "portola",
                    "name": "Renamed",
                    "station": "Grill",
                }),
            )
            .await,
    )
    .await;
    assert_forbidden(server.delete(&path).await).await;

    let stored = entity::prelude::UcsbDiningCommonsMenuItem::find()
        .all(&server.db)
        .await
        .unwrap();
    assert_eq!(stored, vec![item]);
}

/// Tests listing menu items as a regular user.
///
/// Expected: 200 with the stored item in camelCase
#[tokio::test]
async fn user_lists_menu_items() {
    let server = TestServer::start().await;
    let item = factory::create_menu_item(&server.db).await.unwrap();
    server.login_user().await;

    let response = server.get("/api/ucsbdiningcommonsmenuitems/all").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!([{
            "id": item.id,
            "diningCommonsCode": item.dining_commons_code,
            "name": item.name,
            "station": item.station,
        }])
    );
}

/// Tests that admins can read, since they also hold the user role.
///
/// Expected: 200
#[tokio::test]
async fn admin_can_read() {
    let server = TestServer::start().await;
    server.login_admin().await;

    let response = server.get("/api/ucsbdiningcommonsmenuitems/all").await;

    assert_eq!(response.status(), StatusCode::OK);
}

/// Tests the create, update and delete cycle of a menu item.
///
/// Expected: 200 on each step and the final lookup 404
#[tokio::test]
async fn admin_manages_menu_item_lifecycle() {
    let server = TestServer::start().await;
    server.login_admin().await;

    let created: Value = server
        .post(
            "/api/ucsbdiningcommonsmenuitems/post",
            &[
                ("diningCommonsCode", "ortega"),
                ("name", "Baked Pesto Pasta with Chicken"),
                ("station", "Entree Specials"),
            ],
        )
        .await
        .json()
        .await
        .unwrap();
    let id = created["id"].as_i64().unwrap();
    let path = format!("/api/ucsbdiningcommonsmenuitems?id={}", id);

    let updated: Value = server
        .put(
            &path,
            &json!({
                "diningCommonsCode": "portola",
                "name": "Tofu Banh Mi Sandwich (v)",
                "station": "Entree Specials",
            }),
        )
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(updated["id"], id);
    assert_eq!(updated["diningCommonsCode"], "portola");

    let deleted = server.delete(&path).await;
    assert_eq!(deleted.status(), StatusCode::OK);

    assert_not_found(
        server.get(&path).await,
        &format!("UCSBDiningCommonsMenuItem with id {} not found", id),
    )
    .await;
}

/// Tests updating a missing menu item.
///
/// Expected: 404 with "UCSBDiningCommonsMenuItem with id 67 not found"
#[tokio::test]
async fn admin_update_missing_menu_item_is_404() {
    let server = TestServer::start().await;
    server.login_admin().await;

    assert_not_found(
        server
            .put(
                "/api/ucsbdiningcommonsmenuitems?id=67",
                &json!({
                    "diningCommonsCode": "portola",
                    "name": "Tofu Banh Mi Sandwich (v)",
                    "station": "Entree Specials",
                }),
            )
            .await,
        "UCSBDiningCommonsMenuItem with id 67 not found",
    )
    .await;
}
