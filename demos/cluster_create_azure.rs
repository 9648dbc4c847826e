//! Creates an Azure cluster with brand new network resources.
//!
//! ```bash
//! NKS_API_TOKEN=... NKS_ORG_ID=... NKS_SSH_KEYSET=... NKS_AZR_KEYSET=... \
//!     cargo run --example cluster_create_azure -- --node-size standard_A2
//! ```

use std::error::Error;

use clap::Parser;
use nks_sdk::constants::{NKS_AZR_KEYSET, NKS_ORG_ID, NKS_SSH_KEYSET};
use nks_sdk::models::solution::HELM_TILLER_SOLUTION;
use nks_sdk::models::{Cluster, NetworkResource, Provider, Solution};
use nks_sdk::{NksClient, get_formatted_instance_list, get_id_from_env, instance_in_list};
use tracing_subscriber::EnvFilter;

const CLUSTER_NAME: &str = "Test Azure Cluster Rust SDK";
const REGION: &str = "eastus";
const NETWORK_CIDR: &str = "10.0.0.0/16";
const SUBNET_CIDR: &str = "10.0.0.0/24";

#[derive(Parser)]
#[command(name = "cluster_create_azure")]
#[command(about = "Create an Azure cluster on NKS")]
struct Cli {
    /// Size of masters and workers, must be one of the listed options
    #[arg(long)]
    node_size: String,

    /// Kubernetes version to install
    #[arg(long, default_value = "v1.10.4")]
    kubernetes_version: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let provider = Provider::Azure;

    let client = NksClient::new_from_env()?;
    let org_id = get_id_from_env(NKS_ORG_ID)?;
    let ssh_keyset_id = get_id_from_env(NKS_SSH_KEYSET)?;
    let azure_keyset_id = get_id_from_env(NKS_AZR_KEYSET)?;

    let specs = client.get_instance_specs(&provider, "")?;
    println!("Node size options for provider {}:", provider);
    for option in get_formatted_instance_list(&specs) {
        println!("{}", option);
    }

    let node_size = cli.node_size;
    if !instance_in_list(&specs, &node_size) {
        return Err(format!("Invalid option: {}", node_size).into());
    }

    let cluster = Cluster {
        provider_keyset_id: azure_keyset_id,
        master_size: node_size.clone(),
        worker_size: node_size,
        region: REGION.to_string(),
        provider_resource_group: Some(NetworkResource::New),
        provider_network_id: Some(NetworkResource::New),
        provider_network_cidr: Some(NETWORK_CIDR.to_string()),
        provider_subnet_id: Some(NetworkResource::New),
        provider_subnet_cidr: Some(SUBNET_CIDR.to_string()),
        kubernetes_version: cli.kubernetes_version,
        ssh_keyset_id,
        solutions: vec![Solution::new(HELM_TILLER_SOLUTION)],
        ..Cluster::new(CLUSTER_NAME, provider)
    };

    let cluster = client.create_cluster(org_id, &cluster)?;
    println!(
        "Cluster created (ID: {}) (instance name: {}), building...",
        cluster.id, cluster.instance_id
    );

    Ok(())
}
