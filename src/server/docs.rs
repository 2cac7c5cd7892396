//! OpenAPI document.
//!
//! Fixed endpoints are described through `#[utoipa::path]` annotations; resource
//! endpoints are generated from the `Resource` contract so every resource documents
//! the same five operations with its own key, parameters and record schema.

use utoipa::{
    openapi::{
        path::{HttpMethod, OperationBuilder, ParameterBuilder, ParameterIn, PathItem, PathItemBuilder},
        request_body::RequestBodyBuilder,
        schema::ArrayBuilder,
        ComponentsBuilder, ContentBuilder, OpenApiBuilder, PathsBuilder, Ref, RefOr, Required,
        Response, ResponseBuilder, Schema,
    },
    IntoParams, OpenApi, PartialSchema, ToSchema,
};

use crate::server::{
    model::{
        api::{ErrorDto, MessageDto},
        articles::Article,
        help_request::HelpRequest,
        resource::Resource,
        ucsb_dining_commons_menu_item::UcsbDiningCommonsMenuItem,
        ucsb_organization::UcsbOrganization,
        user::{CurrentUserDto, UserDto},
    },
};

const JSON: &str = "application/json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "UCSB API",
        description = "Role-gated CRUD endpoints for campus resources"
    ),
    paths(
        crate::server::controller::user::current_user,
        crate::server::controller::auth::logout
    ),
    components(schemas(ErrorDto, MessageDto, UserDto, CurrentUserDto))
)]
struct ApiDoc;

/// Builds the complete OpenAPI document.
pub fn openapi() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();

    doc.merge(resource_doc::<Article>());
    doc.merge(resource_doc::<HelpRequest>());
    doc.merge(resource_doc::<UcsbDiningCommonsMenuItem>());
    doc.merge(resource_doc::<UcsbOrganization>());

    doc
}

fn schema_ref(name: impl Into<String>) -> RefOr<Schema> {
    RefOr::Ref(Ref::from_schema_name(name))
}

fn json_response(description: &str, schema: RefOr<Schema>) -> Response {
    ResponseBuilder::new()
        .description(description)
        .content(JSON, ContentBuilder::new().schema(Some(schema)).build())
        .build()
}

fn empty_response(description: &str) -> Response {
    ResponseBuilder::new().description(description).build()
}

/// Documents the five operations of `R`.
fn resource_doc<R: Resource>() -> utoipa::openapi::OpenApi {
    let record = || schema_ref(<R as ToSchema>::name());
    let error = || schema_ref(<ErrorDto as ToSchema>::name());

    let key = || {
        ParameterBuilder::new()
            .name(R::KEY_PARAM)
            .parameter_in(ParameterIn::Query)
            .required(Required::True)
            .schema(Some(<R::Key as PartialSchema>::schema()))
            .build()
    };

    let list = OperationBuilder::new()
        .tag(R::NAME)
        .summary(Some(format!("List all {} records", R::NAME)))
        .response(
            "200",
            json_response(
                "All records",
                RefOr::T(Schema::Array(ArrayBuilder::new().items(record()).build())),
            ),
        )
        .response("403", empty_response("Caller lacks the user role"))
        .build();

    let get = OperationBuilder::new()
        .tag(R::NAME)
        .summary(Some(format!("Get a single {}", R::NAME)))
        .parameter(key())
        .response("200", json_response("The record", record()))
        .response("400", json_response("Key missing or malformed", error()))
        .response("403", empty_response("Caller lacks the user role"))
        .response("404", json_response("No record under the key", error()))
        .build();

    let create = OperationBuilder::new()
        .tag(R::NAME)
        .summary(Some(format!("Create a new {}", R::NAME)))
        .parameters(Some(R::CreateParams::into_params(|| {
            Some(ParameterIn::Query)
        })))
        .response("200", json_response("The record as stored", record()))
        .response("400", json_response("Parameters missing or malformed", error()))
        .response("403", empty_response("Caller lacks the admin role"))
        .build();

    let update = OperationBuilder::new()
        .tag(R::NAME)
        .summary(Some(format!("Update a single {}", R::NAME)))
        .parameter(key())
        .request_body(Some(
            RequestBodyBuilder::new()
                .content(JSON, ContentBuilder::new().schema(Some(record())).build())
                .required(Some(Required::True))
                .build(),
        ))
        .response("200", json_response("The updated record", record()))
        .response("400", json_response("Key or body malformed", error()))
        .response("403", empty_response("Caller lacks the admin role"))
        .response("404", json_response("No record under the key", error()))
        .build();

    let mut item = PathItemBuilder::new()
        .operation(HttpMethod::Get, get)
        .operation(HttpMethod::Put, update);

    if R::DELETABLE {
        let delete = OperationBuilder::new()
            .tag(R::NAME)
            .summary(Some(format!("Delete a {}", R::NAME)))
            .parameter(key())
            .response(
                "200",
                json_response(
                    "Deletion confirmation",
                    schema_ref(<MessageDto as ToSchema>::name()),
                ),
            )
            .response("400", json_response("Key missing or malformed", error()))
            .response("403", empty_response("Caller lacks the admin role"))
            .response("404", json_response("No record under the key", error()))
            .build();

        item = item.operation(HttpMethod::Delete, delete);
    }

    let paths = PathsBuilder::new()
        .path(format!("{}/all", R::PATH), PathItem::new(HttpMethod::Get, list))
        .path(format!("{}/post", R::PATH), PathItem::new(HttpMethod::Post, create))
        .path(R::PATH, item.build())
        .build();

    let mut schemas = vec![(<R as ToSchema>::name().to_string(), R::schema())];
    <R as ToSchema>::schemas(&mut schemas);

    OpenApiBuilder::new()
        .paths(paths)
        .components(Some(ComponentsBuilder::new().schemas_from_iter(schemas).build()))
        .build()
}
