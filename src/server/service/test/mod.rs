use crate::server::{
    data::memory::{MemoryStore, StoreCall},
    error::{auth::AuthError, AppError},
    middleware::auth::{authorize, Grant, Role, RoleSet},
    model::{
        articles::{Article, CreateArticleParams},
        ucsb_organization::{CreateOrganizationParams, UcsbOrganization},
    },
    service::resource::{Operation, ResourceService},
};

mod authorization;

fn grant(role: Role) -> Grant {
    let roles: RoleSet = [role].into_iter().collect();
    authorize(&roles, role).unwrap()
}

fn article(id: i64, title: &str) -> Article {
    Article {
        id: Some(id),
        title: title.to_string(),
        url: format!("https://example.com/{}", id),
        explanation: "An article worth reading".to_string(),
        email: "cgaucho@ucsb.edu".to_string(),
        date_added: "2022-01-03T00:00:00".parse().unwrap(),
    }
}

fn organization(org_code: &str) -> UcsbOrganization {
    UcsbOrganization {
        org_code: org_code.to_string(),
        org_translation_short: "ZETA PHI RHO".to_string(),
        org_translation: "ZETA PHI RHO".to_string(),
        inactive: false,
    }
}
