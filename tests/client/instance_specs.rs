use nks_sdk::models::Provider;
use nks_sdk::{get_formatted_instance_list, instance_in_list};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::mock_server::NksMockServer;

fn mount_catalog(server: &NksMockServer, provider: &str, body: serde_json::Value) {
    server.mount(
        Mock::given(method("GET"))
            .and(path("/meta/provider_instances"))
            .and(query_param("provider", provider))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1),
    );
}

#[test]
fn list_and_validate_instance_sizes() {
    let server = NksMockServer::start();
    mount_catalog(
        &server,
        "aws",
        json!([
            { "size": "t2.medium", "name": "T2 Medium", "cpu": 2, "memory": 4.0 },
            { "size": "m4.large", "name": "M4 Large", "cpu": 2, "memory": 8.0, "storage": "EBS only" },
        ]),
    );

    let specs = server.client().get_instance_specs(&Provider::Aws, "").unwrap();

    assert_eq!(
        get_formatted_instance_list(&specs).collect::<Vec<String>>(),
        vec![
            "t2.medium - T2 Medium (2 vCPU, 4 GiB)".to_string(),
            "m4.large - M4 Large (2 vCPU, 8 GiB, EBS only)".to_string(),
        ]
    );
    assert!(instance_in_list(&specs, "m4.large"));
    assert!(!instance_in_list(&specs, "M4.large"));
}

#[test]
fn endpoint_override_targets_another_api() {
    let production = NksMockServer::start();
    let staging = NksMockServer::start();
    mount_catalog(&staging, "oneandone", json!([{ "size": "M", "name": "M" }]));

    let specs = production
        .client()
        .get_instance_specs(&Provider::OneAndOne, &staging.uri())
        .unwrap();

    assert_eq!(specs.len(), 1);
    assert!(instance_in_list(&specs, "M"));
    assert_eq!(production.received_requests(), 0);
    assert_eq!(staging.received_requests(), 1);
}

#[test]
fn empty_catalog_accepts_nothing() {
    let server = NksMockServer::start();
    mount_catalog(&server, "gke", json!([]));

    let specs = server.client().get_instance_specs(&Provider::Gke, "").unwrap();

    assert_eq!(get_formatted_instance_list(&specs).count(), 0);
    assert!(!instance_in_list(&specs, "n1-standard-1"));
}
