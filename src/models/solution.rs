use serde_derive::{Deserialize, Serialize};

use crate::models::State;
use crate::models::is_zero;

pub const HELM_TILLER_SOLUTION: &str = "helm_tiller";

/// Add-on installed into a cluster at creation time.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Solution {
    #[serde(rename = "pk", default, skip_serializing_if = "is_zero")]
    pub id: i64,
    pub solution: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(rename = "keyset", default, skip_serializing_if = "Option::is_none")]
    pub keyset_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<State>,
}

impl Solution {
    pub fn new(solution: &str) -> Self {
        Solution {
            solution: solution.to_string(),
            ..Default::default()
        }
    }
}
