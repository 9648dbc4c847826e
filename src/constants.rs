// Environment variables read to build a client
pub const NKS_API_TOKEN: &str = "NKS_API_TOKEN";
pub const NKS_BASE_API_URL: &str = "NKS_BASE_API_URL";

// Environment variables holding identifiers
pub const NKS_ORG_ID: &str = "NKS_ORG_ID";
pub const NKS_SSH_KEYSET: &str = "NKS_SSH_KEYSET";
pub const NKS_AWS_KEYSET: &str = "NKS_AWS_KEYSET";
pub const NKS_AZR_KEYSET: &str = "NKS_AZR_KEYSET";
pub const NKS_GCE_KEYSET: &str = "NKS_GCE_KEYSET";
pub const NKS_GKE_KEYSET: &str = "NKS_GKE_KEYSET";
pub const NKS_ONEANDONE_KEYSET: &str = "NKS_ONEANDONE_KEYSET";
pub const NKS_DO_KEYSET: &str = "NKS_DO_KEYSET";
pub const NKS_PACKET_KEYSET: &str = "NKS_PACKET_KEYSET";

pub const DEFAULT_NKS_API_URL: &str = "https://api.nks.netapp.io/";
pub const STAGING_NKS_API_URL: &str = "https://api-staging.stackpoint.io/";

/// Value of a provider network, subnet or resource group field asking the
/// service to provision a new resource instead of reusing an existing one.
pub const NEW_RESOURCE_SENTINEL: &str = "__new__";

pub const RUNNING_STATE: &str = "running";

pub const DEFAULT_REQUEST_TIMEOUT_IN_SECONDS: u64 = 30;
pub const DEFAULT_POLL_INTERVAL_IN_MILLIS: u64 = 1000;
