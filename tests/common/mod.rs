//! Shared utilities for integration tests.
#![allow(dead_code)]

use persons_service::config::ServiceConfig;
use persons_service::lifecycle::{self, RunningService};
use serde_json::{json, Value};

/// Start the service on an ephemeral local port.
pub async fn start_service(mut config: ServiceConfig) -> RunningService {
    config.listener.bind_address = "127.0.0.1:0".to_string();
    lifecycle::start(config).await.unwrap()
}

/// Base URL of the person API for a running service.
pub fn api_url(service: &RunningService) -> String {
    format!("http://{}/persons/v1", service.local_addr())
}

/// URL of `operation` for one identification, percent-encoded as a
/// single path segment.
pub fn id_url(service: &RunningService, operation: &[&str], identification: &str) -> reqwest::Url {
    let mut url = reqwest::Url::parse(&api_url(service)).unwrap();
    url.path_segments_mut()
        .unwrap()
        .extend(operation)
        .push(identification);
    url
}

/// Client that does not follow redirects and bypasses proxies.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}

/// A person payload in the service's wire format.
pub fn person_json(identification: &str, first_name: &str, addresses: Vec<Value>) -> Value {
    json!({
        "identification": identification,
        "fisrtName": first_name,
        "lastName": "perez",
        "email": format!("{first_name}@mail.com"),
        "address": addresses,
    })
}

/// An address payload in the service's wire format.
pub fn address_json(city: &str, kind: &str) -> Value {
    json!({
        "main_street": "av. amazonas",
        "secundary_street": "naciones unidas",
        "n_house": "n35-17",
        "city": city,
        "postal_code": 170135,
        "addresType": kind,
    })
}
