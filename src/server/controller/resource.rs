//! Generic handlers for the resource contract.
//!
//! Every resource is served by the same five handlers, instantiated per record type by
//! `routes::<R>()`. Each handler first resolves the caller's grant and only then decodes
//! the key, query parameters or body, so unauthorized callers are rejected before any
//! request validation runs.

use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::Uri,
    routing::{get, post},
    Json, Router,
};
use tower_sessions::Session;

use crate::server::{
    error::AppError,
    middleware::auth::{AuthGuard, Grant},
    model::{
        api::MessageDto,
        resource::{Resource, ResourceKey},
    },
    service::resource::{Operation, ResourceService},
    state::{AppState, StoreFor},
};

/// Registers the handlers for `R` under `R::PATH`.
///
/// - `GET {path}/all` - list
/// - `GET {path}?{key}=..` - get
/// - `POST {path}/post?..` - create
/// - `PUT {path}?{key}=..` - update
/// - `DELETE {path}?{key}=..` - delete, only when `R::DELETABLE`
pub fn routes<R>() -> Router<AppState>
where
    R: Resource,
    AppState: StoreFor<R>,
{
    let item = get(get_by_key::<R>).put(update::<R>);
    let item = if R::DELETABLE {
        item.delete(delete::<R>)
    } else {
        item
    };

    Router::new()
        .route(&format!("{}/all", R::PATH), get(list::<R>))
        .route(&format!("{}/post", R::PATH), post(create::<R>))
        .route(R::PATH, item)
}

/// List every record of `R`.
///
/// # Access Control
/// - `User`
///
/// # Returns
/// - `200 OK` - JSON array of records
/// - `403 Forbidden` - Caller lacks the user role
pub async fn list<R>(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<Vec<R>>, AppError>
where
    R: Resource,
    AppState: StoreFor<R>,
{
    let grant = authorize(&state, &session, Operation::List).await?;

    let store = <AppState as StoreFor<R>>::store(&state);
    let records = ResourceService::new(store.as_ref()).list(grant).await?;

    Ok(Json(records))
}

/// Get one record of `R` by its key query parameter.
///
/// # Access Control
/// - `User`
///
/// # Returns
/// - `200 OK` - The record
/// - `400 Bad Request` - Key parameter missing or malformed
/// - `403 Forbidden` - Caller lacks the user role
/// - `404 Not Found` - No record under the key
pub async fn get_by_key<R>(
    State(state): State<AppState>,
    session: Session,
    uri: Uri,
) -> Result<Json<R>, AppError>
where
    R: Resource,
    AppState: StoreFor<R>,
{
    let grant = authorize(&state, &session, Operation::Get).await?;
    let key = key_param::<R>(&uri)?;

    let store = <AppState as StoreFor<R>>::store(&state);
    let record = ResourceService::new(store.as_ref())
        .get_by_key(grant, &key)
        .await?;

    Ok(Json(record))
}

/// Create a record of `R` from query parameters.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - The record as stored, including any assigned key
/// - `400 Bad Request` - Parameters missing or malformed
/// - `403 Forbidden` - Caller lacks the admin role
pub async fn create<R>(
    State(state): State<AppState>,
    session: Session,
    uri: Uri,
) -> Result<Json<R>, AppError>
where
    R: Resource,
    AppState: StoreFor<R>,
{
    let grant = authorize(&state, &session, Operation::Create).await?;
    let Query(params) = Query::<R::CreateParams>::try_from_uri(&uri)?;

    let store = <AppState as StoreFor<R>>::store(&state);
    let record = ResourceService::new(store.as_ref())
        .create(grant, params)
        .await?;

    Ok(Json(record))
}

/// Update the allow-listed fields of one record of `R` from a JSON body.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - The updated record
/// - `400 Bad Request` - Key parameter or body missing or malformed
/// - `403 Forbidden` - Caller lacks the admin role
/// - `404 Not Found` - No record under the key
pub async fn update<R>(
    State(state): State<AppState>,
    session: Session,
    uri: Uri,
    body: Bytes,
) -> Result<Json<R>, AppError>
where
    R: Resource,
    AppState: StoreFor<R>,
{
    let grant = authorize(&state, &session, Operation::Update).await?;
    let key = key_param::<R>(&uri)?;
    let Json(incoming) = Json::<R>::from_bytes(&body)?;

    let store = <AppState as StoreFor<R>>::store(&state);
    let record = ResourceService::new(store.as_ref())
        .update(grant, &key, incoming)
        .await?;

    Ok(Json(record))
}

/// Delete one record of `R`.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - `{"message": "<Name> with id <key> deleted"}`
/// - `400 Bad Request` - Key parameter missing or malformed
/// - `403 Forbidden` - Caller lacks the admin role
/// - `404 Not Found` - No record under the key
pub async fn delete<R>(
    State(state): State<AppState>,
    session: Session,
    uri: Uri,
) -> Result<Json<MessageDto>, AppError>
where
    R: Resource,
    AppState: StoreFor<R>,
{
    let grant = authorize(&state, &session, Operation::Delete).await?;
    let key = key_param::<R>(&uri)?;

    let store = <AppState as StoreFor<R>>::store(&state);
    let message = ResourceService::new(store.as_ref())
        .delete(grant, &key)
        .await?;

    Ok(Json(MessageDto { message }))
}

async fn authorize(
    state: &AppState,
    session: &Session,
    operation: Operation,
) -> Result<Grant, AppError> {
    AuthGuard::new(&state.db, session)
        .require(operation.required_role())
        .await
}

/// Reads and parses `R`'s key query parameter.
fn key_param<R: Resource>(uri: &Uri) -> Result<R::Key, AppError> {
    let Query(params) = Query::<HashMap<String, String>>::try_from_uri(uri)?;

    let raw = params.get(R::KEY_PARAM).ok_or_else(|| {
        AppError::BadRequest(format!(
            "Required request parameter '{}' is not present",
            R::KEY_PARAM
        ))
    })?;

    R::Key::parse(raw).ok_or_else(|| {
        AppError::BadRequest(format!(
            "Invalid value '{}' for request parameter '{}'",
            raw,
            R::KEY_PARAM
        ))
    })
}
