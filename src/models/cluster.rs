use serde_derive::{Deserialize, Serialize};

use crate::models::is_zero;
use crate::models::{NetworkResource, Provider, Solution, State};

pub const DEFAULT_ETCD_TYPE: &str = "classic";
pub const DEFAULT_PLATFORM: &str = "coreos";
pub const DEFAULT_CHANNEL: &str = "stable";

/// A managed Kubernetes cluster.
///
/// Built client side and submitted with `NksClient::create_cluster`. The service fills `id`, `instance_id`
/// and the read only fields (state, owner organization, timestamps) in its response.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Cluster {
    #[serde(rename = "pk", default, skip_serializing_if = "is_zero")]
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub instance_id: String,
    pub provider: Provider,
    #[serde(rename = "provider_keyset", default)]
    pub provider_keyset_id: i64,
    #[serde(default, skip_serializing_if = "is_zero_count")]
    pub master_count: u32,
    #[serde(default)]
    pub master_size: String,
    #[serde(default, skip_serializing_if = "is_zero_count")]
    pub worker_count: u32,
    #[serde(default)]
    pub worker_size: String,
    #[serde(default)]
    pub region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    #[serde(
        rename = "provider_network_id_requested",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub provider_network_id: Option<NetworkResource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_network_cidr: Option<String>,
    #[serde(
        rename = "provider_subnet_id_requested",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub provider_subnet_id: Option<NetworkResource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_subnet_cidr: Option<String>,
    #[serde(
        rename = "provider_resource_group_requested",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub provider_resource_group: Option<NetworkResource>,
    #[serde(rename = "k8s_version", default)]
    pub kubernetes_version: String,
    #[serde(rename = "k8s_rbac_enabled", default)]
    pub rbac_enabled: bool,
    #[serde(rename = "k8s_dashboard_enabled", default)]
    pub dashboard_enabled: bool,
    #[serde(default)]
    pub etcd_type: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub channel: String,
    #[serde(rename = "user_ssh_keyset", default)]
    pub ssh_keyset_id: i64,
    #[serde(default)]
    pub solutions: Vec<Solution>,

    // set by the service
    #[serde(rename = "org", default, skip_serializing)]
    pub organization_id: Option<i64>,
    #[serde(default, skip_serializing)]
    pub state: Option<State>,
    #[serde(default, skip_serializing)]
    pub kubeconfig_available: bool,
    #[serde(default, skip_serializing)]
    pub created: Option<String>,
    #[serde(default, skip_serializing)]
    pub updated: Option<String>,
}

fn is_zero_count(count: &u32) -> bool {
    *count == 0
}

impl Cluster {
    /// A single master, two workers cluster with RBAC and the dashboard enabled, on a classic etcd and the
    /// stable CoreOS channel. Sizes, region and credentials are left to the caller.
    pub fn new(name: &str, provider: Provider) -> Self {
        Cluster {
            id: 0,
            name: name.to_string(),
            instance_id: "".to_string(),
            provider,
            provider_keyset_id: 0,
            master_count: 1,
            master_size: "".to_string(),
            worker_count: 2,
            worker_size: "".to_string(),
            region: "".to_string(),
            zone: None,
            provider_network_id: None,
            provider_network_cidr: None,
            provider_subnet_id: None,
            provider_subnet_cidr: None,
            provider_resource_group: None,
            kubernetes_version: "".to_string(),
            rbac_enabled: true,
            dashboard_enabled: true,
            etcd_type: DEFAULT_ETCD_TYPE.to_string(),
            platform: DEFAULT_PLATFORM.to_string(),
            channel: DEFAULT_CHANNEL.to_string(),
            ssh_keyset_id: 0,
            solutions: vec![],
            organization_id: None,
            state: None,
            kubeconfig_available: false,
            created: None,
            updated: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state.as_ref().map(State::is_running).unwrap_or(false)
    }

    /// State as reported by the service, `draft` when the response did not carry one.
    pub fn state(&self) -> State {
        self.state.clone().unwrap_or_default()
    }
}
