use async_trait::async_trait;
use bsync_core::{ArticleSource, NormalizedArticle, Result};

/// Article source of last resort: the list the portfolio shipped before any
/// sync ran. Served when the artifact is missing, malformed or empty.
pub struct StaticSource;

impl StaticSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StaticSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArticleSource for StaticSource {
    fn name(&self) -> &str {
        "fallback"
    }

    async fn articles(&self) -> Result<Vec<NormalizedArticle>> {
        Ok(fallback_articles())
    }
}

fn fallback_articles() -> Vec<NormalizedArticle> {
    vec![NormalizedArticle {
        id: 1,
        title: "How I Built a Trade Finance App on Hyperledger Fabric: A Complete Blockchain Project Walkthrough".to_string(),
        description: "Dive into a detailed walkthrough of building a full-stack trade finance application using Hyperledger Fabric. Learn about smart contracts, network setup, API integration, and performance benchmarking for enterprise-grade decentralized solutions.".to_string(),
        url: "https://dev.to/parshuram_singh/how-i-built-a-trade-finance-app-on-hyperledger-fabric-a-complete-blockchain-project-walkthrough-amb".to_string(),
        cover_image: "https://media2.dev.to/dynamic/image/width=1000,height=420,fit=cover,gravity=auto,format=auto/https%3A%2F%2Fdev-to-uploads.s3.amazonaws.com%2Fuploads%2Farticles%2Fh9lwecoq95penbjd0k5r.png".to_string(),
        published_at: "2024-07-26T12:00:00Z".to_string(),
        public_reactions_count: 5,
    }]
}
