use std::path::Path;
use std::sync::Arc;

use bsync_core::ArticleSource;
use tracing::debug;

pub mod artifact;
pub mod fallback;

pub use artifact::ArtifactSource;
pub use fallback::StaticSource;

/// Picks the article source by availability: the synced artifact when it is
/// readable, parseable and non-empty, the static fallback otherwise.
pub async fn select(path: &Path) -> Arc<dyn ArticleSource> {
    match artifact::read(path).await {
        Ok(articles) if !articles.is_empty() => Arc::new(ArtifactSource::new(path)),
        Ok(_) => {
            debug!("artifact at {} is empty, using fallback", path.display());
            Arc::new(StaticSource::new())
        }
        Err(e) => {
            debug!("artifact at {} unavailable ({}), using fallback", path.display(), e);
            Arc::new(StaticSource::new())
        }
    }
}
