use serde_derive::{Deserialize, Serialize};

use crate::models::State;

/// A machine belonging to a cluster, read only from the client side.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Node {
    #[serde(rename = "pk")]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "cluster", default)]
    pub cluster_id: i64,
    #[serde(default)]
    pub instance_id: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub group_name: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub private_ip: Option<String>,
    #[serde(default)]
    pub public_ip: Option<String>,
    #[serde(default)]
    pub state: State,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub updated: Option<String>,
}

impl Node {
    pub fn is_master(&self) -> bool {
        self.role.as_deref() == Some("master")
    }
}
