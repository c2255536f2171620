use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct SyncEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> SyncEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        println!("Starting mirror sync...");

        // Extract
        println!("Listing repository contents...");
        let entries = self.pipeline.extract().await?;
        println!("Collected {} package entries", entries.len());

        // Transform
        println!("Building payloads...");
        let payloads = self.pipeline.transform(entries).await?;

        // Load
        println!("Reporting to server...");
        let summary = self.pipeline.load(payloads).await?;

        Ok(summary)
    }
}
