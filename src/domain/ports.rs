use crate::domain::model::{PackageEntry, RepoEntry, SyncPayloads};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn server_url(&self) -> &str;
    fn admin_token(&self) -> &str;
    fn repos(&self) -> &[RepoEntry];
}

/// Outcome of probing the external list tool. Every failure mode collapses
/// into `Unavailable`; callers only need a yes/no.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolAvailability {
    Available,
    Unavailable,
}

#[async_trait]
pub trait PackageLister: Send + Sync {
    async fn probe(&self) -> ToolAvailability;

    /// Raw stdout of listing one repository. Nonzero exit is an error.
    async fn list(&self, repo: &str) -> Result<String>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<PackageEntry>>;
    async fn transform(&self, data: Vec<PackageEntry>) -> Result<SyncPayloads>;
    async fn load(&self, payloads: SyncPayloads) -> Result<String>;
}
