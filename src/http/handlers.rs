//! Person API handlers, mounted under [`BASE_PATH`].
//!
//! Writes are uppercased before they reach storage. Every read or write
//! except delete answers an empty 200 when it has nothing to return.

use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};

use crate::domain::{Address, Normalize, Person};
use crate::http::response::NullableJson;
use crate::http::server::AppState;

pub const BASE_PATH: &str = "/persons/v1";

/// Routes of the person API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/persons/v1", get(index))
        .route("/persons/v1/", get(index))
        .route("/persons/v1/save", post(save))
        .route("/persons/v1/findAll", get(find_all))
        .route("/persons/v1/findById/{identification}", get(find_by_id))
        .route("/persons/v1/updateById/{identification}", put(update_by_id))
        .route("/persons/v1/deleteById/{identification}", delete(delete_by_id))
        .route(
            "/persons/v1/address/house/{identification}",
            get(find_house_addresses_by_id),
        )
}

/// Redirect to the API reference page.
pub async fn index(State(state): State<AppState>) -> Response {
    match HeaderValue::from_str(&state.docs_path) {
        Ok(location) => (StatusCode::FOUND, [(header::LOCATION, location)]).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Hubo un error");
            StatusCode::OK.into_response()
        }
    }
}

#[utoipa::path(
    post,
    path = "/persons/v1/save",
    tag = "persons",
    request_body = Person,
    responses(
        (status = OK, description = "Stored person, uppercased. Empty body if it could not be stored", body = Person),
    ),
)]
pub async fn save(State(state): State<AppState>, Json(person): Json<Person>) -> NullableJson<Person> {
    tracing::info!("Guardando persona");
    let person = person.to_upper_case();
    NullableJson::from_store(state.repository.save(person), "Error al guardar persona")
}

#[utoipa::path(
    get,
    path = "/persons/v1/findAll",
    tag = "persons",
    responses((status = OK, description = "Every stored person in insertion order", body = Vec<Person>)),
)]
// Reads a snapshot; there is no failure to collapse.
pub async fn find_all(State(state): State<AppState>) -> Json<Vec<Person>> {
    Json(state.repository.find_all())
}

#[utoipa::path(
    get,
    path = "/persons/v1/findById/{identification}",
    tag = "persons",
    params(("identification" = String, Path, description = "Exact, case-sensitive identification")),
    responses((status = OK, description = "First matching person. Empty body if none", body = Person)),
)]
pub async fn find_by_id(
    State(state): State<AppState>,
    Path(identification): Path<String>,
) -> NullableJson<Person> {
    NullableJson::from_store(
        state.repository.find_by_id(&identification),
        "Error al buscar persona",
    )
}

#[utoipa::path(
    put,
    path = "/persons/v1/updateById/{identification}",
    tag = "persons",
    params(("identification" = String, Path, description = "Identification of the record to replace")),
    request_body = Person,
    responses((status = OK, description = "Replacement record, uppercased. Empty body if no match", body = Person)),
)]
pub async fn update_by_id(
    State(state): State<AppState>,
    Path(identification): Path<String>,
    Json(person): Json<Person>,
) -> NullableJson<Person> {
    let person = person.to_upper_case();
    NullableJson::from_store(
        state.repository.update_by_id(&identification, person),
        "Error al actualizar persona",
    )
}

// No collapsing arm here, unlike the other operations.
#[utoipa::path(
    delete,
    path = "/persons/v1/deleteById/{identification}",
    tag = "persons",
    params(("identification" = String, Path, description = "Identification of the record to remove")),
    responses((status = OK, description = "Whether a person was deleted or not found", body = String, content_type = "text/plain")),
)]
pub async fn delete_by_id(
    State(state): State<AppState>,
    Path(identification): Path<String>,
) -> String {
    let outcome = state.repository.delete_by_id(&identification);
    tracing::info!(
        identification = %identification,
        deleted = outcome.is_deleted(),
        "Eliminando persona"
    );
    outcome.to_string()
}

#[utoipa::path(
    get,
    path = "/persons/v1/address/house/{identification}",
    tag = "persons",
    params(("identification" = String, Path, description = "Exact, case-sensitive identification")),
    responses((status = OK, description = "House addresses in order. Empty body if the person is unknown", body = Vec<Address>)),
)]
pub async fn find_house_addresses_by_id(
    State(state): State<AppState>,
    Path(identification): Path<String>,
) -> NullableJson<Vec<Address>> {
    NullableJson::from_store(
        state.repository.find_house_addresses_by_id(&identification),
        "Error al buscar direcciones de casa",
    )
}
