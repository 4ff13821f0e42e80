use bsync_core::{ArticleRecord, Error, Result};
use tracing::{debug, warn};
use url::Url;

/// Client for the public per-user article-listing endpoint.
///
/// One instance per run; the underlying `reqwest::Client` is reused across
/// page requests.
#[derive(Debug, Clone)]
pub struct DevtoClient {
    http: reqwest::Client,
    endpoint: String,
    per_page: u32,
}

impl DevtoClient {
    pub fn new(endpoint: impl Into<String>, per_page: u32) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            per_page,
        }
    }

    fn page_url(&self, username: &str, page: u32) -> Result<Url> {
        Url::parse_with_params(
            &self.endpoint,
            &[
                ("username", username.to_string()),
                ("per_page", self.per_page.to_string()),
                ("page", page.to_string()),
            ],
        )
        .map_err(|e| Error::Fetch(format!("invalid endpoint {}: {}", self.endpoint, e)))
    }

    /// Fetches one page of the listing.
    ///
    /// A non-success status aborts as an HTTP failure; a body that is not a
    /// JSON array of records aborts as a parse failure.
    pub async fn fetch_page(&self, username: &str, page: u32) -> Result<Vec<ArticleRecord>> {
        let url = self.page_url(username, page)?;
        debug!("fetching {}", url);
        let response = self.http.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Walks the listing sequentially from page 1, accumulating records in
    /// page order then in-page order. The first empty page ends the walk.
    ///
    /// `max_pages` bounds a listing that never runs dry; when the cap is hit
    /// the records accumulated so far are kept and a warning is logged. Any
    /// request failure discards everything fetched so far.
    pub async fn fetch_all(
        &self,
        username: &str,
        max_pages: Option<u32>,
    ) -> Result<Vec<ArticleRecord>> {
        let mut records = Vec::new();
        let mut page = 1;

        loop {
            if let Some(cap) = max_pages {
                if page > cap {
                    warn!("page cap of {} reached for {}, stopping early", cap, username);
                    break;
                }
            }

            let batch = self.fetch_page(username, page).await?;
            if batch.is_empty() {
                break;
            }
            debug!("page {}: {} records", page, batch.len());
            records.extend(batch);
            page += 1;
        }

        Ok(records)
    }
}
