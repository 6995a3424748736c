//! OpenAPI document and the interactive reference page.

use axum::Router;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::domain::{Address, AddressType, Person};
use crate::http::handlers;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Persons API",
        description = "In-memory CRUD service for person records and their postal addresses."
    ),
    paths(
        handlers::save,
        handlers::find_all,
        handlers::find_by_id,
        handlers::update_by_id,
        handlers::delete_by_id,
        handlers::find_house_addresses_by_id,
    ),
    components(schemas(Person, Address, AddressType)),
    tags((name = "persons", description = "Person records"))
)]
pub struct ApiDoc;

/// Router serving the reference page at `path`.
pub fn docs_router(path: &str) -> Router {
    Router::new().merge(Scalar::with_url(path.to_string(), ApiDoc::openapi()))
}
