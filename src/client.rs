use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Response;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::{ClientConfig, parse_base_url};
use crate::constants::DEFAULT_POLL_INTERVAL_IN_MILLIS;
use crate::errors::NksError;
use crate::models::{Cluster, InstanceSpec, Node, Provider, State};
use crate::utilities::get_header_with_bearer;
use crate::wait::{Poller, WaitOutcome};

/// Blocking client for the NKS API.
///
/// Every call performs exactly one request; nothing is cached or retried. The client only holds its
/// configuration and a connection pool, cloning it is cheap.
#[derive(Clone, Debug)]
pub struct NksClient {
    config: ClientConfig,
    http: reqwest::blocking::Client,
    poll_interval: Duration,
}

impl NksClient {
    pub fn new(config: ClientConfig) -> Result<Self, NksError> {
        let headers = get_header_with_bearer(config.token()).map_err(|e| NksError::InvalidToken {
            raw_error_message: e.to_string(),
        })?;

        let http = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.request_timeout_in_seconds()))
            .build()
            .map_err(|e| NksError::HttpClient {
                raw_error_message: e.to_string(),
            })?;

        Ok(NksClient {
            config,
            http,
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_IN_MILLIS),
        })
    }

    /// Builds a client from `NKS_API_TOKEN` and `NKS_BASE_API_URL`.
    pub fn new_from_env() -> Result<Self, NksError> {
        NksClient::new(ClientConfig::new_from_env()?)
    }

    /// Interval between two state queries in the `wait_*` helpers. One second unless overridden.
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn create_cluster(&self, org_id: i64, cluster: &Cluster) -> Result<Cluster, NksError> {
        info!(
            "creating cluster `{}` on {} in organization {}",
            cluster.name, cluster.provider, org_id
        );
        let created: Cluster = self.post(self.url(&format!("orgs/{}/clusters", org_id))?, cluster)?;
        info!(
            "cluster `{}` created with id {} (instance {})",
            created.name, created.id, created.instance_id
        );

        Ok(created)
    }

    pub fn get_clusters(&self, org_id: i64) -> Result<Vec<Cluster>, NksError> {
        self.get(self.url(&format!("orgs/{}/clusters", org_id))?)
    }

    pub fn get_cluster(&self, org_id: i64, cluster_id: i64) -> Result<Cluster, NksError> {
        self.get(self.cluster_url(org_id, cluster_id)?)
    }

    pub fn get_cluster_state(&self, org_id: i64, cluster_id: i64) -> Result<State, NksError> {
        Ok(self.get_cluster(org_id, cluster_id)?.state())
    }

    /// Asks the service to tear the cluster down. Whether deleting twice is harmless is up to the service.
    pub fn delete_cluster(&self, org_id: i64, cluster_id: i64) -> Result<(), NksError> {
        info!("deleting cluster {} in organization {}", cluster_id, org_id);
        self.delete(self.cluster_url(org_id, cluster_id)?)
    }

    pub fn get_nodes(&self, org_id: i64, cluster_id: i64) -> Result<Vec<Node>, NksError> {
        self.get(self.url(&format!("orgs/{}/clusters/{}/nodes", org_id, cluster_id))?)
    }

    pub fn get_node(&self, org_id: i64, cluster_id: i64, node_id: i64) -> Result<Node, NksError> {
        self.get(self.url(&format!("orgs/{}/clusters/{}/nodes/{}", org_id, cluster_id, node_id))?)
    }

    pub fn get_node_state(&self, org_id: i64, cluster_id: i64, node_id: i64) -> Result<State, NksError> {
        Ok(self.get_node(org_id, cluster_id, node_id)?.state)
    }

    /// Instance sizes available for `provider`.
    ///
    /// An empty `endpoint` queries the configured API, any other value is used as the API root instead
    /// (e.g. the staging API).
    pub fn get_instance_specs(&self, provider: &Provider, endpoint: &str) -> Result<Vec<InstanceSpec>, NksError> {
        let base_url = match endpoint.trim().is_empty() {
            true => self.config.base_url().clone(),
            false => parse_base_url(endpoint)?,
        };

        let mut url = join(&base_url, "meta/provider_instances")?;
        url.query_pairs_mut().append_pair("provider", provider.as_str());

        self.get(url)
    }

    /// Blocks until the cluster is running, querying it once per poll interval at most `timeout_in_seconds`
    /// times.
    pub fn wait_cluster_running(
        &self,
        org_id: i64,
        cluster_id: i64,
        timeout_in_seconds: u32,
    ) -> Result<WaitOutcome<State>, NksError> {
        let outcome = self
            .poller(timeout_in_seconds)
            .poll_until(|| self.get_cluster_state(org_id, cluster_id), State::is_running)?;

        match &outcome {
            WaitOutcome::Reached { attempts, .. } => {
                info!("cluster {} is running (try: {})", cluster_id, attempts)
            }
            WaitOutcome::TimedOut { last_state, .. } => warn!(
                "Timeout ({} seconds) reached before cluster {} reached state ({}), last state: {}",
                timeout_in_seconds,
                cluster_id,
                State::Running,
                last_state.as_ref().map(State::as_str).unwrap_or("none"),
            ),
        }

        Ok(outcome)
    }

    pub fn wait_node_running(
        &self,
        org_id: i64,
        cluster_id: i64,
        node_id: i64,
        timeout_in_seconds: u32,
    ) -> Result<WaitOutcome<State>, NksError> {
        let outcome = self.poller(timeout_in_seconds).poll_until(
            || self.get_node_state(org_id, cluster_id, node_id),
            State::is_running,
        )?;

        match &outcome {
            WaitOutcome::Reached { attempts, .. } => {
                info!("node {} is running (try: {})", node_id, attempts)
            }
            WaitOutcome::TimedOut { last_state, .. } => warn!(
                "Timeout ({} seconds) reached before node {} reached state ({}), last state: {}",
                timeout_in_seconds,
                node_id,
                State::Running,
                last_state.as_ref().map(State::as_str).unwrap_or("none"),
            ),
        }

        Ok(outcome)
    }

    fn poller(&self, max_attempts: u32) -> Poller {
        Poller::new(self.poll_interval, max_attempts)
    }

    fn url(&self, path: &str) -> Result<Url, NksError> {
        join(self.config.base_url(), path)
    }

    fn cluster_url(&self, org_id: i64, cluster_id: i64) -> Result<Url, NksError> {
        self.url(&format!("orgs/{}/clusters/{}", org_id, cluster_id))
    }

    fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, NksError> {
        debug!("GET {}", url);
        let response = self.http.get(url.clone()).send()?;
        decode_response(&url, response)
    }

    fn post<B: Serialize, T: DeserializeOwned>(&self, url: Url, body: &B) -> Result<T, NksError> {
        debug!("POST {}", url);
        let response = self.http.post(url.clone()).json(body).send()?;
        decode_response(&url, response)
    }

    fn delete(&self, url: Url) -> Result<(), NksError> {
        debug!("DELETE {}", url);
        let response = self.http.delete(url.clone()).send()?;
        check_status(&url, response).map(|_| ())
    }
}

fn join(base_url: &Url, path: &str) -> Result<Url, NksError> {
    base_url.join(path).map_err(|e| NksError::InvalidBaseUrl {
        url: base_url.to_string(),
        raw_error_message: e.to_string(),
    })
}

fn check_status(url: &Url, response: Response) -> Result<Response, NksError> {
    match response.status() {
        status if status.is_success() => Ok(response),
        StatusCode::NOT_FOUND => Err(NksError::NotFound { url: url.to_string() }),
        status => Err(NksError::Api {
            url: url.to_string(),
            status,
            message: response.text().unwrap_or_default(),
        }),
    }
}

fn decode_response<T: DeserializeOwned>(url: &Url, response: Response) -> Result<T, NksError> {
    let content = check_status(url, response)?.text()?;

    serde_json::from_str::<T>(&content).map_err(|e| NksError::Decoding {
        url: url.to_string(),
        raw_error_message: e.to_string(),
    })
}
