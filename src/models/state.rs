use std::fmt::{Display, Formatter};

use serde_derive::{Deserialize, Serialize};

use crate::constants::RUNNING_STATE;

/// Lifecycle state reported by the service for clusters and nodes.
///
/// Values the client does not know are kept as `Unknown` so a new server side state never breaks decoding.
#[derive(Serialize, Deserialize, Clone, Debug, Default, Hash, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum State {
    #[default]
    Draft,
    Building,
    Provisioning,
    Provisioned,
    Running,
    Upgrading,
    Deleting,
    Deleted,
    Failed,
    Unknown(String),
}

impl State {
    pub fn as_str(&self) -> &str {
        match self {
            State::Draft => "draft",
            State::Building => "building",
            State::Provisioning => "provisioning",
            State::Provisioned => "provisioned",
            State::Running => RUNNING_STATE,
            State::Upgrading => "upgrading",
            State::Deleting => "deleting",
            State::Deleted => "deleted",
            State::Failed => "failed",
            State::Unknown(state) => state.as_str(),
        }
    }

    pub fn is_running(&self) -> bool {
        *self == State::Running
    }
}

impl From<String> for State {
    fn from(state: String) -> Self {
        match state.as_str() {
            "draft" => State::Draft,
            "building" => State::Building,
            "provisioning" => State::Provisioning,
            "provisioned" => State::Provisioned,
            RUNNING_STATE => State::Running,
            "upgrading" => State::Upgrading,
            "deleting" => State::Deleting,
            "deleted" => State::Deleted,
            "failed" => State::Failed,
            _ => State::Unknown(state),
        }
    }
}

impl From<&str> for State {
    fn from(state: &str) -> Self {
        State::from(state.to_string())
    }
}

impl From<State> for String {
    fn from(state: State) -> Self {
        state.as_str().to_string()
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
