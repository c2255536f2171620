pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{ApiResponse, PackageEntry, RepoEntry, SyncPayloads};
pub use crate::domain::ports::{ConfigProvider, PackageLister, Pipeline, ToolAvailability};
pub use crate::utils::error::Result;
