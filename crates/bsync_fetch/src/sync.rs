use std::path::PathBuf;

use bsync_core::{normalize, Result};
use bsync_store::sources::artifact;
use tracing::info;

use crate::devto::DevtoClient;

/// Everything one run needs, supplied by the caller.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Account whose published articles are synced
    pub username: String,
    /// Article-listing endpoint, queried with `username`/`per_page`/`page`
    pub endpoint: String,
    /// Records requested per page
    pub per_page: u32,
    /// Safety cap on pages fetched per run, `None` for unbounded
    pub max_pages: Option<u32>,
    /// Artifact path the UI reads
    pub output: PathBuf,
}

/// One-shot fetch, normalize and persist run over a single account.
///
/// All-or-nothing: the artifact is only touched after every page came back
/// clean, so a failed run leaves the previous snapshot as it was. Retrying is
/// the caller's job.
pub struct SyncJob {
    client: DevtoClient,
    config: SyncConfig,
}

impl SyncJob {
    pub fn new(config: SyncConfig) -> Self {
        let client = DevtoClient::new(config.endpoint.clone(), config.per_page);
        Self { client, config }
    }

    /// Runs the whole pipeline and returns the number of articles written.
    pub async fn run(&self) -> Result<usize> {
        info!("🔄 syncing articles for {}", self.config.username);
        let records = self
            .client
            .fetch_all(&self.config.username, self.config.max_pages)
            .await?;
        let articles = normalize(records);
        artifact::write(&self.config.output, &articles).await?;
        info!(
            "💾 wrote {} articles to {}",
            articles.len(),
            self.config.output.display()
        );
        Ok(articles.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server, ServerGuard};

    fn config_for(server: &ServerGuard, output: PathBuf) -> SyncConfig {
        SyncConfig {
            username: "someone".to_string(),
            endpoint: format!("{}/articles", server.url()),
            per_page: 5,
            max_pages: Some(100),
            output,
        }
    }

    #[tokio::test]
    async fn test_run_discards_source_ids() {
        let mut server = Server::new_async().await;
        let _page1 = server
            .mock("GET", "/articles")
            .match_query(Matcher::UrlEncoded("page".into(), "1".into()))
            .with_body(
                serde_json::json!([{
                    "id": 10,
                    "title": "A",
                    "description": "first",
                    "url": "https://example.com/a",
                    "cover_image": null,
                    "published_at": "2024-07-26T12:00:00Z",
                    "public_reactions_count": 5,
                }])
                .to_string(),
            )
            .create_async()
            .await;
        let _page2 = server
            .mock("GET", "/articles")
            .match_query(Matcher::UrlEncoded("page".into(), "2".into()))
            .with_body("[]")
            .create_async()
            .await;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blogs.json");
        let count = SyncJob::new(config_for(&server, path.clone())).run().await.unwrap();
        assert_eq!(count, 1);

        let written = artifact::read(&path).await.unwrap();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].id, 1);
        assert_eq!(written[0].title, "A");
        assert_eq!(written[0].cover_image, "");
    }

    #[tokio::test]
    async fn test_failed_run_leaves_previous_artifact_untouched() {
        let mut server = Server::new_async().await;
        let _page1 = server
            .mock("GET", "/articles")
            .match_query(Matcher::UrlEncoded("page".into(), "1".into()))
            .with_body(
                serde_json::json!([{
                    "id": 1,
                    "title": "fresh",
                    "description": "",
                    "url": "https://example.com/fresh",
                    "cover_image": null,
                    "published_at": "2024-07-26T12:00:00Z",
                    "public_reactions_count": 0,
                }])
                .to_string(),
            )
            .create_async()
            .await;
        let _page2 = server
            .mock("GET", "/articles")
            .match_query(Matcher::UrlEncoded("page".into(), "2".into()))
            .with_status(502)
            .create_async()
            .await;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blogs.json");
        let previous = br#"[{"stale": true}]"#;
        tokio::fs::write(&path, previous).await.unwrap();

        let result = SyncJob::new(config_for(&server, path.clone())).run().await;
        assert!(result.is_err());

        let after = tokio::fs::read(&path).await.unwrap();
        assert_eq!(after, previous);
    }

    #[tokio::test]
    async fn test_empty_first_page_writes_empty_artifact() {
        let mut server = Server::new_async().await;
        let _page1 = server
            .mock("GET", "/articles")
            .match_query(Matcher::Any)
            .with_body("[]")
            .create_async()
            .await;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blogs.json");
        let count = SyncJob::new(config_for(&server, path.clone())).run().await.unwrap();
        assert_eq!(count, 0);

        let raw = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(raw, "[]");
    }
}
