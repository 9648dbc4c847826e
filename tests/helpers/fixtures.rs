use chrono::Utc;
use nks_sdk::models::solution::HELM_TILLER_SOLUTION;
use nks_sdk::models::{Cluster, NetworkResource, Provider, Solution};
use serde_json::{Value, json};

fn ticks() -> String {
    Utc::now().timestamp_millis().to_string()
}

/// Cluster definitions used by the functional tests, one per provider.
pub fn test_cluster(provider: &Provider) -> Cluster {
    let name = format!("Test {} Cluster Rust SDK {}", provider.as_str().to_uppercase(), ticks());
    let base = Cluster {
        kubernetes_version: "v1.13.1".to_string(),
        provider_network_id: Some(NetworkResource::New),
        provider_network_cidr: Some("172.23.0.0/16".to_string()),
        provider_subnet_id: Some(NetworkResource::New),
        provider_subnet_cidr: Some("172.23.1.0/24".to_string()),
        solutions: vec![Solution::new(HELM_TILLER_SOLUTION)],
        ..Cluster::new(&name, provider.clone())
    };

    match provider {
        Provider::Aws | Provider::Eks => Cluster {
            master_size: "t2.medium".to_string(),
            worker_size: "t2.medium".to_string(),
            region: "us-east-1".to_string(),
            zone: Some("us-east-1a".to_string()),
            ..base
        },
        Provider::Azure | Provider::Aks => Cluster {
            master_size: "standard_A2".to_string(),
            worker_size: "standard_A2".to_string(),
            region: "eastus".to_string(),
            provider_resource_group: Some(NetworkResource::New),
            provider_network_cidr: Some("10.0.0.0/16".to_string()),
            provider_subnet_cidr: Some("10.0.0.0/24".to_string()),
            ..base
        },
        Provider::Gce => Cluster {
            master_size: "n1-standard-1".to_string(),
            worker_size: "n1-standard-1".to_string(),
            region: "us-east1-c".to_string(),
            ..base
        },
        Provider::Gke => Cluster {
            master_size: "n1-standard-1".to_string(),
            worker_size: "n1-standard-1".to_string(),
            region: "us-east1-c".to_string(),
            kubernetes_version: "latest".to_string(),
            platform: "gci".to_string(),
            ..base
        },
        Provider::OneAndOne | Provider::DigitalOcean | Provider::Packet | Provider::Unknown(_) => Cluster {
            provider_network_id: None,
            provider_network_cidr: None,
            provider_subnet_id: None,
            provider_subnet_cidr: None,
            ..base
        },
    }
}

/// Body the service answers with once `cluster` has been accepted.
pub fn created_cluster_body(cluster: &Cluster, id: i64, state: &str) -> Value {
    let mut body = serde_json::to_value(cluster).expect("cluster should serialize");
    body["pk"] = json!(id);
    body["org"] = json!(1);
    body["instance_id"] = json!(format!("spc{}", id));
    body["state"] = json!(state);
    body
}

pub fn cluster_body(id: i64, state: &str) -> Value {
    created_cluster_body(&test_cluster(&Provider::Aws), id, state)
}

pub fn node_body(id: i64, cluster_id: i64, state: &str) -> Value {
    json!({
        "pk": id,
        "name": format!("spc{}-worker-{}", cluster_id, id),
        "cluster": cluster_id,
        "instance_id": format!("spc{}-worker-{}", cluster_id, id),
        "role": "worker",
        "group_name": "autoscaling-workers",
        "private_ip": "172.23.1.11",
        "public_ip": "54.12.34.56",
        "platform": "coreos",
        "location": "us-east-1:us-east-1a",
        "size": "t2.medium",
        "state": state,
    })
}
