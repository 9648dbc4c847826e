//! Creates a 1&1 cluster, listing node sizes from the staging API.
//!
//! ```bash
//! NKS_API_TOKEN=... NKS_ORG_ID=... NKS_SSH_KEYSET=... NKS_ONEANDONE_KEYSET=... \
//!     cargo run --example cluster_create_oneandone -- --node-size M
//! ```

use std::error::Error;

use clap::Parser;
use nks_sdk::constants::{NKS_ONEANDONE_KEYSET, NKS_ORG_ID, NKS_SSH_KEYSET, STAGING_NKS_API_URL};
use nks_sdk::models::solution::HELM_TILLER_SOLUTION;
use nks_sdk::models::{Cluster, Provider, Solution};
use nks_sdk::{NksClient, get_formatted_instance_list, get_id_from_env, instance_in_list};
use tracing_subscriber::EnvFilter;

const CLUSTER_NAME: &str = "Test 1&1 Cluster Rust SDK";
const REGION: &str = "US";

#[derive(Parser)]
#[command(name = "cluster_create_oneandone")]
#[command(about = "Create a 1&1 cluster on NKS")]
struct Cli {
    /// Size of masters and workers, must be one of the listed options
    #[arg(long)]
    node_size: String,

    /// API root serving the instance catalog
    #[arg(long, default_value = STAGING_NKS_API_URL)]
    catalog_endpoint: String,

    /// Kubernetes version to install
    #[arg(long, default_value = "v1.8.3")]
    kubernetes_version: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let provider = Provider::OneAndOne;

    let client = NksClient::new_from_env()?;
    let org_id = get_id_from_env(NKS_ORG_ID)?;
    let ssh_keyset_id = get_id_from_env(NKS_SSH_KEYSET)?;
    let oneandone_keyset_id = get_id_from_env(NKS_ONEANDONE_KEYSET)?;

    let specs = client.get_instance_specs(&provider, &cli.catalog_endpoint)?;
    println!("Node size options for provider {}:", provider);
    for option in get_formatted_instance_list(&specs) {
        println!("{}", option);
    }

    let node_size = cli.node_size;
    if !instance_in_list(&specs, &node_size) {
        return Err(format!("Invalid option: {}", node_size).into());
    }

    let cluster = Cluster {
        provider_keyset_id: oneandone_keyset_id,
        master_size: node_size.clone(),
        worker_size: node_size,
        region: REGION.to_string(),
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
