use crate::core::{
    ApiResponse, ConfigProvider, PackageEntry, PackageLister, Pipeline, SyncPayloads,
};
use crate::utils::error::Result;
use reqwest::Client;

/// One package name per nonblank line; trailing fields (version, arch) are
/// dropped with everything after the first whitespace run.
pub fn parse_package_names(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_string)
        .collect()
}

pub struct MirrorSyncPipeline<L: PackageLister, C: ConfigProvider> {
    lister: L,
    config: C,
    client: Client,
}

impl<L: PackageLister, C: ConfigProvider> MirrorSyncPipeline<L, C> {
    pub fn new(lister: L, config: C) -> Self {
        Self {
            lister,
            config,
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl<L: PackageLister, C: ConfigProvider> Pipeline for MirrorSyncPipeline<L, C> {
    async fn extract(&self) -> Result<Vec<PackageEntry>> {
        let mut entries = Vec::new();

        // 依設定檔順序逐一列出倉庫內容
        for repo in self.config.repos() {
            tracing::debug!("Listing repository: {}", repo.name);
            let raw = self.lister.list(&repo.name).await?;

            for name in parse_package_names(&raw) {
                entries.push(PackageEntry {
                    name,
                    repo: repo.name.clone(),
                });
            }
        }

        Ok(entries)
    }

    async fn transform(&self, data: Vec<PackageEntry>) -> Result<SyncPayloads> {
        Ok(SyncPayloads {
            repos: self.config.repos().to_vec(),
            packages: data,
        })
    }

    async fn load(&self, payloads: SyncPayloads) -> Result<String> {
        let repo_count = payloads.repos.len();
        let package_count = payloads.packages.len();

        // 逐一註冊倉庫；HTTP 錯誤狀態照樣印出並繼續
        let repo_url = format!("{}/repo", self.config.server_url());
        for repo in &payloads.repos {
            tracing::debug!("Registering repository: {}", repo.name);
            let response = self
                .client
                .post(&repo_url)
                .bearer_auth(self.config.admin_token())
                .json(repo)
                .send()
                .await?;

            let status = response.status();
            let body: ApiResponse = response.json().await?;
            println!("{} {}", status.as_u16(), body.msg);
        }

        // 所有套件一次送出
        let package_url = format!("{}/package", self.config.server_url());
        tracing::debug!("Submitting {} package entries", package_count);
        let response = self
            .client
            .post(&package_url)
            .bearer_auth(self.config.admin_token())
            .json(&payloads.packages)
            .send()
            .await?;

        let status = response.status();
        let body: ApiResponse = response.json().await?;
        println!("{} {}", status.as_u16(), body.msg);

        Ok(format!(
            "{} repositories and {} packages reported",
            repo_count, package_count
        ))
    }
}
