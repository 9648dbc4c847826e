//! Waits for a node to reach the running state.
//!
//! ```bash
//! NKS_API_TOKEN=... NKS_ORG_ID=... cargo run --example wait_for_node -- --cluster-id 10 --node-id 20 --timeout 600
//! ```

use std::error::Error;

use clap::Parser;
use nks_sdk::constants::NKS_ORG_ID;
use nks_sdk::models::State;
use nks_sdk::{NksClient, WaitOutcome, get_id_from_env};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "wait_for_node")]
#[command(about = "Wait until an NKS node is running")]
struct Cli {
    #[arg(long)]
    cluster_id: i64,

    #[arg(long)]
    node_id: i64,

    /// Seconds to wait, the node state is queried once per second
    #[arg(long, default_value_t = 600)]
    timeout: u32,
}

fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let client = NksClient::new_from_env()?;
    let org_id = get_id_from_env(NKS_ORG_ID)?;

    match client.wait_node_running(org_id, cli.cluster_id, cli.node_id, cli.timeout)? {
        WaitOutcome::Reached { attempts, .. } => {
            println!("(Try: {}) Node at ID {} state: {}", attempts, cli.node_id, State::Running)
        }
        WaitOutcome::TimedOut { .. } => println!(
            "Timeout ({} seconds) reached before node reached state ({})",
            cli.timeout,
            State::Running
        ),
    }

    Ok(())
}
