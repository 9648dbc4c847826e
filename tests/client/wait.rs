use nks_sdk::models::State;
use nks_sdk::{NksError, WaitOutcome};
use reqwest::StatusCode;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::fixtures::{cluster_body, node_body};
use crate::helpers::mock_server::{NksMockServer, TEST_ORG_ID};

const NODE_PATH: &str = "/orgs/1/clusters/10/nodes/20";

#[test]
fn wait_node_running_stops_when_running_is_observed() {
    let server = NksMockServer::start();
    server.mount_get_sequence(
        NODE_PATH,
        vec![
            node_body(20, 10, "draft"),
            node_body(20, 10, "building"),
            node_body(20, 10, "provisioned"),
            node_body(20, 10, "running"),
        ],
    );

    let outcome = server.client().wait_node_running(TEST_ORG_ID, 10, 20, 10).unwrap();

    assert_eq!(
        outcome,
        WaitOutcome::Reached {
            state: State::Running,
            attempts: 4
        }
    );
    assert_eq!(server.received_requests(), 4);
}

#[test]
fn wait_node_running_times_out_after_exactly_timeout_queries() {
    let server = NksMockServer::start();
    server.mount_get_sequence(NODE_PATH, vec![node_body(20, 10, "provisioned")]);

    let outcome = server.client().wait_node_running(TEST_ORG_ID, 10, 20, 5).unwrap();

    assert_eq!(
        outcome,
        WaitOutcome::TimedOut {
            last_state: Some(State::Provisioned),
            attempts: 5
        }
    );
    assert_eq!(server.received_requests(), 5);
}

#[test]
fn wait_node_running_aborts_on_failed_query() {
    let server = NksMockServer::start();
    server.mount(
        Mock::given(method("GET"))
            .and(path(NODE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(node_body(20, 10, "building")))
            .up_to_n_times(1),
    );
    server.mount(
        Mock::given(method("GET"))
            .and(path(NODE_PATH))
            .respond_with(ResponseTemplate::new(500).set_body_string("internal error")),
    );

    let result = server.client().wait_node_running(TEST_ORG_ID, 10, 20, 10);

    match result {
        Err(NksError::Api { status, .. }) => assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR),
        other => panic!("expected an api error, got {:?}", other),
    }
    assert_eq!(server.received_requests(), 2);
}

#[test]
fn wait_node_running_with_zero_timeout_sends_nothing() {
    let server = NksMockServer::start();
    server.mount_get_sequence(NODE_PATH, vec![node_body(20, 10, "running")]);

    let outcome = server.client().wait_node_running(TEST_ORG_ID, 10, 20, 0).unwrap();

    assert!(outcome.is_timed_out());
    assert_eq!(outcome.attempts(), 0);
    assert_eq!(outcome.state(), None);
    assert_eq!(server.received_requests(), 0);
}

#[test]
fn wait_cluster_running_follows_cluster_state() {
    let server = NksMockServer::start();
    server.mount_get_sequence(
        "/orgs/1/clusters/10",
        vec![cluster_body(10, "provisioning"), cluster_body(10, "running")],
    );

    let outcome = server.client().wait_cluster_running(TEST_ORG_ID, 10, 30).unwrap();

    assert!(outcome.is_reached());
    assert_eq!(outcome.attempts(), 2);
    assert_eq!(outcome.state(), Some(&State::Running));
    assert_eq!(server.received_requests(), 2);
}

#[test]
fn wait_cluster_running_times_out_on_failed_cluster() {
    let server = NksMockServer::start();
    server.mount_get_sequence("/orgs/1/clusters/10", vec![cluster_body(10, "failed")]);

    let outcome = server.client().wait_cluster_running(TEST_ORG_ID, 10, 3).unwrap();

    assert_eq!(
        outcome,
        WaitOutcome::TimedOut {
            last_state: Some(State::Failed),
            attempts: 3
        }
    );
}
