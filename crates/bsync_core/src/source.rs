use async_trait::async_trait;

use crate::types::NormalizedArticle;
use crate::Result;

/// Where the UI gets its article list from.
///
/// Implementations are selected by availability: the synced artifact when it
/// is present and healthy, a static fallback otherwise.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Short name used in logs and listings
    fn name(&self) -> &str;

    /// The full ordered article list
    async fn articles(&self) -> Result<Vec<NormalizedArticle>>;
}
