use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bsync_core::{ArticleSource, NormalizedArticle, Result};

/// Writes the full collection as pretty-printed JSON, overwriting whatever
/// was there. The buffer is fully serialized before the file is touched, so
/// a serialization failure leaves a previous artifact in place.
pub async fn write(path: &Path, articles: &[NormalizedArticle]) -> Result<()> {
    let body = serde_json::to_vec_pretty(articles)?;
    tokio::fs::write(path, body).await?;
    Ok(())
}

/// Loads a previously written artifact.
pub async fn read(path: &Path) -> Result<Vec<NormalizedArticle>> {
    let body = tokio::fs::read(path).await?;
    Ok(serde_json::from_slice(&body)?)
}

/// Article source backed by the synced artifact on disk.
pub struct ArtifactSource {
    path: PathBuf,
}

impl ArtifactSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ArticleSource for ArtifactSource {
    fn name(&self) -> &str {
        "artifact"
    }

    async fn articles(&self) -> Result<Vec<NormalizedArticle>> {
        read(&self.path).await
    }
}
