pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::paclist::PaclistTool;
pub use config::{CliConfig, SyncConfig};
pub use crate::core::{engine::SyncEngine, pipeline::MirrorSyncPipeline};
pub use utils::error::{Result, SyncError};
