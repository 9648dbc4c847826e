pub mod cluster;
pub mod instance_spec;
pub mod network;
pub mod node;
pub mod provider;
pub mod solution;
pub mod state;

pub use cluster::Cluster;
pub use instance_spec::InstanceSpec;
pub use network::NetworkResource;
pub use node::Node;
pub use provider::Provider;
pub use solution::Solution;
pub use state::State;

pub(crate) fn is_zero(id: &i64) -> bool {
    *id == 0
}
