pub mod client;
pub mod config;
pub mod constants;
pub mod errors;
pub mod instance_catalog;
pub mod models;
mod utilities;
pub mod wait;

pub use client::NksClient;
pub use config::{ClientConfig, get_id_from_env, get_id_from_lookup};
pub use errors::NksError;
pub use instance_catalog::{get_formatted_instance_list, instance_in_list};
pub use wait::{Poller, WaitOutcome};
