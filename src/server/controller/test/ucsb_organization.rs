use super::*;
use sea_orm::EntityTrait;

/// Tests that a logged-out caller is rejected on every exposed operation.
///
/// Expected: 403 with empty body for list, get, create and update
#[tokio::test]
async fn logged_out_caller_is_forbidden_everywhere() {
    let server = TestServer::start().await;

    assert_forbidden(server.get("/api/ucsborganizations/all").await).await;
    assert_forbidden(server.get("/api/ucsborganizations?orgCode=ZPR").await).await;
    assert_forbidden(server.post("/api/ucsborganizations/post", &[]).await).await;
    assert_forbidden(
        server
            .put("/api/ucsborganizations?orgCode=ZPR", &json!({}))
            .await,
    )
    .await;
}

/// Tests that a regular user cannot create or update.
///
/// Expected: 403 for both and only the factory organization stored, unchanged
#[tokio::test]
async fn user_cannot_mutate_organizations() {
    let server = TestServer::start().await;
    let organization = factory::ucsb_organization::OrganizationFactory::new(&server.db)
        .org_code("ZPR")
        .build()
        .await
        .unwrap();
    server.login_user().await;

    assert_forbidden(
        server
            .post(
                "/api/ucsborganizations/post",
                &[
                    ("orgCode", "KRC"),
                    ("orgTranslationShort", "KOREAN RADIO CL"),
                    ("orgTranslation", "KOREAN RADIO CLUB"),
                    ("inactive", "false"),
                ],
            )
            .await,
    )
    .await;
    assert_forbidden(
        server
            .put(
                "/api/ucsborganizations?orgCode=ZPR",
                &json!({
                    "orgTranslationShort": "CHANGED",
                    "orgTranslation": "CHANGED",
                    "inactive": true,
                }),
            )
            .await,
    )
    .await;

    let stored = entity::prelude::UcsbOrganization::find()
        .all(&server.db)
        .await
        .unwrap();
    assert_eq!(stored, vec![organization]);
}

/// Tests creating an organization with an empty code.
///
/// Expected: 400 BadRequest and nothing stored
#[tokio::test]
async fn admin_create_with_empty_code_is_400() {
    let server = TestServer::start().await;
    server.login_admin().await;

    let response = server
        .post(
            "/api/ucsborganizations/post",
            &[
                ("orgCode", ""),
                ("orgTranslationShort", "NO CODE"),
                ("orgTranslation", "NO CODE"),
                ("inactive", "false"),
            ],
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["type"], "BadRequest");

    let stored = entity::prelude::UcsbOrganization::find()
        .all(&server.db)
        .await
        .unwrap();
    assert!(stored.is_empty());
}

/// Tests fetching an organization by its code.
///
/// Expected: 200 with the organization
#[tokio::test]
async fn user_gets_organization_by_code() {
    let server = TestServer::start().await;
    factory::ucsb_organization::OrganizationFactory::new(&server.db)
        .org_code("ZPR")
        .build()
        .await
        .unwrap();
    server.login_user().await;

    let response = server.get("/api/ucsborganizations?orgCode=ZPR").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["orgCode"], "ZPR");
    assert_eq!(body["inactive"], false);
}

/// Tests fetching an unknown organization code.
///
/// Expected: 404 with "UCSBOrganization with id WWW not found"
#[tokio::test]
async fn user_gets_404_for_unknown_code() {
    let server = TestServer::start().await;
    server.login_user().await;

    assert_not_found(
        server.get("/api/ucsborganizations?orgCode=WWW").await,
        "UCSBOrganization with id WWW not found",
    )
    .await;
}

/// Tests creating an organization under a caller-chosen code.
///
/// Expected: 200 with the supplied code as key
#[tokio::test]
async fn admin_creates_organization_with_natural_key() {
    let server = TestServer::start().await;
    server.login_admin().await;

    let response = server
        .post(
            "/api/ucsborganizations/post",
            &[
                ("orgCode", "KRC"),
                ("orgTranslationShort", "KOREAN RADIO CL"),
                ("orgTranslation", "KOREAN RADIO CLUB"),
                ("inactive", "true"),
            ],
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "orgCode": "KRC",
            "orgTranslationShort": "KOREAN RADIO CL",
            "orgTranslation": "KOREAN RADIO CLUB",
            "inactive": true,
        })
    );
}

/// Tests that an update never changes the organization code.
///
/// Expected: 200 with the original code and edited fields
#[tokio::test]
async fn admin_update_keeps_org_code() {
    let server = TestServer::start().await;
    factory::ucsb_organization::OrganizationFactory::new(&server.db)
        .org_code("ZPR")
        .build()
        .await
        .unwrap();
    server.login_admin().await;

    let response = server
        .put(
            "/api/ucsborganizations?orgCode=ZPR",
            &json!({
                "orgCode": "SKY",
                "orgTranslationShort": "ZETA PHI RHO",
                "orgTranslation": "ZETA PHI RHO FRATERNITY",
                "inactive": true,
            }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "orgCode": "ZPR",
            "orgTranslationShort": "ZETA PHI RHO",
            "orgTranslation": "ZETA PHI RHO FRATERNITY",
            "inactive": true,
        })
    );
}

/// Tests updating an unknown organization code.
///
/// Expected: 404 naming UCSBOrganization
#[tokio::test]
async fn admin_update_unknown_code_is_404() {
    let server = TestServer::start().await;
    server.login_admin().await;

    assert_not_found(
        server
            .put(
                "/api/ucsborganizations?orgCode=WWW",
                &json!({
                    "orgTranslationShort": "ZETA PHI RHO",
                    "orgTranslation": "ZETA PHI RHO FRATERNITY",
                    "inactive": true,
                }),
            )
            .await,
        "UCSBOrganization with id WWW not found",
    )
    .await;
}

/// Tests that organizations do not expose delete.
///
/// Expected: 405 Method Not Allowed
#[tokio::test]
async fn delete_is_not_exposed() {
    let server = TestServer::start().await;
    server.login_admin().await;

    let response = server.delete("/api/ucsborganizations?orgCode=ZPR").await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
