use crate::core::{PackageLister, ToolAvailability};
use crate::utils::error::{Result, SyncError};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

pub const PACLIST_PROGRAM: &str = "paclist";

/// Adapter over the pacman-contrib `paclist` binary.
///
/// The program name is injectable so tests can point it at stub scripts.
#[derive(Debug, Clone)]
pub struct PaclistTool {
    program: String,
}

impl PaclistTool {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for PaclistTool {
    fn default() -> Self {
        Self::new(PACLIST_PROGRAM)
    }
}

#[async_trait]
impl PackageLister for PaclistTool {
    async fn probe(&self) -> ToolAvailability {
        let status = Command::new(&self.program)
            .arg("--help")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await;

        match status {
            Ok(status) if status.success() => ToolAvailability::Available,
            _ => ToolAvailability::Unavailable,
        }
    }

    async fn list(&self, repo: &str) -> Result<String> {
        tracing::debug!("Running `{} {}`", self.program, repo);
        let output = Command::new(&self.program).arg(repo).output().await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SyncError::ToolError {
                message: format!(
                    "`{} {}` failed ({}): {}",
                    self.program,
                    repo,
                    output.status,
                    stderr.trim()
                ),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}
