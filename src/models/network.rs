use std::fmt::{Display, Formatter};

use serde_derive::{Deserialize, Serialize};

use crate::constants::NEW_RESOURCE_SENTINEL;

/// Reference to a provider network, subnet or resource group.
///
/// On the wire `New` is the `__new__` sentinel; any other value is the identifier of an existing resource.
#[derive(Serialize, Deserialize, Clone, Debug, Hash, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum NetworkResource {
    New,
    Existing(String),
}

impl NetworkResource {
    pub fn existing(id: &str) -> Self {
        NetworkResource::from(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        match self {
            NetworkResource::New => NEW_RESOURCE_SENTINEL,
            NetworkResource::Existing(id) => id.as_str(),
        }
    }

    pub fn is_new(&self) -> bool {
        *self == NetworkResource::New
    }
}

impl From<String> for NetworkResource {
    fn from(value: String) -> Self {
        match value.as_str() {
            NEW_RESOURCE_SENTINEL => NetworkResource::New,
            _ => NetworkResource::Existing(value),
        }
    }
}

impl From<NetworkResource> for String {
    fn from(resource: NetworkResource) -> Self {
        resource.as_str().to_string()
    }
}

impl Display for NetworkResource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
