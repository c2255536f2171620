use serde::{Deserialize, Serialize};

/// A repository paired with the mirror source that serves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoEntry {
    pub name: String,
    pub mirror: String,
}

/// A package paired with the repository it was listed under.
///
/// Duplicate package names across differing repos stay separate entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageEntry {
    pub name: String,
    pub repo: String,
}

/// Everything the load stage sends to the server, in send order.
#[derive(Debug, Clone)]
pub struct SyncPayloads {
    pub repos: Vec<RepoEntry>,
    pub packages: Vec<PackageEntry>,
}

/// Server reply body. `msg` is required; a reply without it fails the call.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    pub msg: String,
}
