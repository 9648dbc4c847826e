use std::env;
use std::time::Instant;

use dotenv::dotenv;
use nks_sdk::constants::{NKS_ORG_ID, NKS_SSH_KEYSET};
use nks_sdk::models::Provider;
use nks_sdk::{NksClient, get_id_from_env};
use tracing::info;
use tracing_subscriber::EnvFilter;

pub fn init() -> Instant {
    dotenv().ok();

    let _ = match env::var_os("CI") {
        Some(_) => tracing_subscriber::fmt()
            .json()
            .with_max_level(tracing::Level::INFO)
            .with_current_span(true)
            .try_init(),
        None => tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
            .try_init(),
    };

    Instant::now()
}

pub fn teardown(start_time: Instant, test_name: String) {
    info!("{} seconds for test {}", start_time.elapsed().as_secs_f64(), test_name);
}

pub fn run_test<T>(test: T)
where
    T: FnOnce() -> String,
{
    let start = init();

    let test_name = test();

    teardown(start, test_name);
}

/// Identifiers a functional test needs, read from the environment (or a `.env` file).
pub struct FuncTestsSecrets {
    pub org_id: i64,
    pub ssh_keyset_id: i64,
}

impl FuncTestsSecrets {
    pub fn new() -> Self {
        dotenv().ok();

        FuncTestsSecrets {
            org_id: get_id_from_env(NKS_ORG_ID).expect("NKS_ORG_ID is not set"),
            ssh_keyset_id: get_id_from_env(NKS_SSH_KEYSET).expect("NKS_SSH_KEYSET is not set"),
        }
    }

    pub fn provider_keyset_id(&self, provider: &Provider) -> i64 {
        let env_var = provider
            .keyset_env_var()
            .unwrap_or_else(|| panic!("no keyset variable for provider {}", provider));

        get_id_from_env(env_var).unwrap_or_else(|e| panic!("keyset for provider {} is not usable: {}", provider, e))
    }

    pub fn client(&self) -> NksClient {
        NksClient::new_from_env().expect("cannot build NKS client from environment")
    }
}
