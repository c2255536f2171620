use crate::core::ConfigProvider;
use crate::domain::model::RepoEntry;
use crate::utils::error::{Result, SyncError};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use clap::Parser;

/// 要同步的倉庫 {name: use_mirror}
pub const DEFAULT_REPOS: &[(&str, &str)] = &[
    ("core", "official"),
    ("extra", "official"),
    ("community", "official"),
    ("multilib", "official"),
    ("chaotic-aur", "chaotic"),
];

/// Server url
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

/// Admin Token
pub const DEFAULT_ADMIN_TOKEN: &str =
    "727ff0536ee4010ab0527de3537fbd09e1459f254cbb77980714d27c3a31cc32";

#[derive(Debug, Clone, Parser)]
#[command(name = "pacsync")]
#[command(about = "Reports locally mirrored pacman repositories to a package tracking server")]
pub struct CliConfig {
    /// Base URL of the tracking server
    #[arg(long, default_value = DEFAULT_SERVER_URL)]
    pub server_url: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Resolved configuration, built once at startup and passed by reference.
///
/// Repositories keep their definition order; the sync iterates them as-is.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub server_url: String,
    pub admin_token: String,
    pub repos: Vec<RepoEntry>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            admin_token: DEFAULT_ADMIN_TOKEN.to_string(),
            repos: DEFAULT_REPOS
                .iter()
                .map(|(name, mirror)| RepoEntry {
                    name: (*name).to_string(),
                    mirror: (*mirror).to_string(),
                })
                .collect(),
        }
    }
}

impl SyncConfig {
    pub fn from_cli(cli: &CliConfig) -> Self {
        Self {
            server_url: cli.server_url.clone(),
            ..Self::default()
        }
    }
}

impl ConfigProvider for SyncConfig {
    fn server_url(&self) -> &str {
        &self.server_url
    }

    fn admin_token(&self) -> &str {
        &self.admin_token
    }

    fn repos(&self) -> &[RepoEntry] {
        &self.repos
    }
}

impl Validate for SyncConfig {
    fn validate(&self) -> Result<()> {
        validate_url("server_url", &self.server_url)?;
        validate_non_empty_string("admin_token", &self.admin_token)?;

        if self.repos.is_empty() {
            return Err(SyncError::InvalidConfigValueError {
                field: "repos".to_string(),
                value: "[]".to_string(),
                reason: "At least one repository is required".to_string(),
            });
        }

        Ok(())
    }
}
