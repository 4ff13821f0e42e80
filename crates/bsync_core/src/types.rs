use serde::{Deserialize, Serialize};

/// One record as returned by the upstream listing endpoint. Untrusted input;
/// only the fields the portfolio consumes are declared, anything else in the
/// payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ArticleRecord {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub url: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    pub published_at: String,
    #[serde(default)]
    pub public_reactions_count: u64,
}

/// The persisted article shape the portfolio UI reads at load time.
///
/// `id` is the 1-based position in the synced collection, not the upstream
/// identifier. `cover_image` is always a string; articles without one carry
/// the empty string so the UI never sees a null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedArticle {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub url: String,
    pub cover_image: String,
    pub published_at: String,
    pub public_reactions_count: u64,
}

impl NormalizedArticle {
    fn from_record(position: u64, record: ArticleRecord) -> Self {
        Self {
            id: position,
            title: record.title,
            description: record.description,
            url: record.url,
            cover_image: record.cover_image.unwrap_or_default(),
            published_at: record.published_at,
            public_reactions_count: record.public_reactions_count,
        }
    }
}

/// Maps accumulated records to the persisted shape, reassigning ids as dense
/// 1-based positions in the order the records were fetched.
pub fn normalize(records: Vec<ArticleRecord>) -> Vec<NormalizedArticle> {
    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| NormalizedArticle::from_record(i as u64 + 1, record))
        .collect()
}
