use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde_derive::{Deserialize, Serialize};
use strum_macros::EnumIter;

use crate::constants::{
    NKS_AWS_KEYSET, NKS_AZR_KEYSET, NKS_DO_KEYSET, NKS_GCE_KEYSET, NKS_GKE_KEYSET, NKS_ONEANDONE_KEYSET,
    NKS_PACKET_KEYSET,
};
use crate::errors::NksError;

/// Infrastructure a cluster can be provisioned on.
///
/// Parsing user input is strict (`FromStr`), while a provider returned by the service that the client does
/// not know is kept as `Unknown` so listing an organization never fails on it.
#[derive(Serialize, Deserialize, Clone, Debug, Hash, PartialEq, Eq, EnumIter)]
#[serde(from = "String", into = "String")]
pub enum Provider {
    Aws,
    Eks,
    Azure,
    Aks,
    Gce,
    Gke,
    OneAndOne,
    DigitalOcean,
    Packet,
    #[strum(disabled)]
    Unknown(String),
}

impl Provider {
    pub fn as_str(&self) -> &str {
        match self {
            Provider::Aws => "aws",
            Provider::Eks => "eks",
            Provider::Azure => "azure",
            Provider::Aks => "aks",
            Provider::Gce => "gce",
            Provider::Gke => "gke",
            Provider::OneAndOne => "oneandone",
            Provider::DigitalOcean => "do",
            Provider::Packet => "packet",
            Provider::Unknown(provider) => provider.as_str(),
        }
    }

    fn from_known(s: &str) -> Option<Provider> {
        match s {
            "aws" => Some(Provider::Aws),
            "eks" => Some(Provider::Eks),
            "azure" => Some(Provider::Azure),
            "aks" => Some(Provider::Aks),
            "gce" => Some(Provider::Gce),
            "gke" => Some(Provider::Gke),
            "oneandone" => Some(Provider::OneAndOne),
            "do" => Some(Provider::DigitalOcean),
            "packet" => Some(Provider::Packet),
            _ => None,
        }
    }

    /// Environment variable holding the keyset id to use for this provider.
    /// Managed flavors share the keyset of their cloud (eks with aws, aks with azure).
    pub fn keyset_env_var(&self) -> Option<&'static str> {
        match self {
            Provider::Aws | Provider::Eks => Some(NKS_AWS_KEYSET),
            Provider::Azure | Provider::Aks => Some(NKS_AZR_KEYSET),
            Provider::Gce => Some(NKS_GCE_KEYSET),
            Provider::Gke => Some(NKS_GKE_KEYSET),
            Provider::OneAndOne => Some(NKS_ONEANDONE_KEYSET),
            Provider::DigitalOcean => Some(NKS_DO_KEYSET),
            Provider::Packet => Some(NKS_PACKET_KEYSET),
            Provider::Unknown(_) => None,
        }
    }

    pub fn is_managed_kubernetes(&self) -> bool {
        matches!(self, Provider::Eks | Provider::Aks | Provider::Gke)
    }
}

impl Display for Provider {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = NksError;

    fn from_str(s: &str) -> Result<Provider, NksError> {
        Provider::from_known(s).ok_or_else(|| NksError::UnknownProvider { provider: s.to_string() })
    }
}

impl From<String> for Provider {
    fn from(provider: String) -> Self {
        Provider::from_known(&provider).unwrap_or(Provider::Unknown(provider))
    }
}

impl From<Provider> for String {
    fn from(provider: Provider) -> Self {
        provider.as_str().to_string()
    }
}
