use std::time::Duration;

use futures_util::StreamExt;
use reqwest::StatusCode;
use site_logging::{site_debug, site_trace};
use url::Url;

use clubsite_core::RawRecord;

use crate::decode::{WireDocument, WireListResponse};
use crate::{DocumentStore, FailureKind, StoreError};

#[derive(Debug, Clone)]
pub struct StoreSettings {
    pub base_url: String,
    pub project_id: String,
    pub database: String,
    pub api_key: Option<String>,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub page_size: u32,
    pub max_bytes: u64,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            base_url: "https://firestore.googleapis.com".to_string(),
            project_id: String::new(),
            database: "(default)".to_string(),
            api_key: None,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            page_size: 300,
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

/// Document store backed by the Firestore REST API.
#[derive(Debug, Clone)]
pub struct FirestoreStore {
    settings: StoreSettings,
    client: reqwest::Client,
}

impl FirestoreStore {
    pub fn new(settings: StoreSettings) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| StoreError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn documents_url(&self, path: &[&str]) -> Result<Url, StoreError> {
        if path.iter().any(|segment| segment.is_empty()) {
            return Err(StoreError::new(
                FailureKind::InvalidPath,
                "empty path segment",
            ));
        }
        let mut url = Url::parse(&self.settings.base_url)
            .map_err(|err| StoreError::new(FailureKind::InvalidPath, err.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| StoreError::new(FailureKind::InvalidPath, "base url cannot be a base"))?
            .pop_if_empty()
            .extend([
                "v1",
                "projects",
                self.settings.project_id.as_str(),
                "databases",
                self.settings.database.as_str(),
                "documents",
            ])
            .extend(path.iter().copied());
        if let Some(key) = &self.settings.api_key {
            url.query_pairs_mut().append_pair("key", key);
        }
        Ok(url)
    }

    /// Body of a successful GET, or `None` on 404.
    async fn get_body(&self, url: Url) -> Result<Option<Vec<u8>>, StoreError> {
        site_trace!("GET {}", url.path());
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(StoreError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(StoreError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(StoreError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            body.extend_from_slice(&chunk);
        }
        Ok(Some(body))
    }
}

#[async_trait::async_trait]
impl DocumentStore for FirestoreStore {
    async fn list_documents(&self, path: &[&str]) -> Result<Vec<RawRecord>, StoreError> {
        if path.len() % 2 == 0 {
            return Err(StoreError::new(
                FailureKind::InvalidPath,
                format!("{} does not name a collection", path.join("/")),
            ));
        }
        let base = self.documents_url(path)?;
        let mut records = Vec::new();
        let mut page_token: Option<String> = None;
        loop {
            let mut url = base.clone();
            {
                let mut query = url.query_pairs_mut();
                query.append_pair("pageSize", &self.settings.page_size.to_string());
                if let Some(token) = &page_token {
                    query.append_pair("pageToken", token);
                }
            }
            // A missing collection is simply empty.
            let Some(body) = self.get_body(url).await? else {
                break;
            };
            let page: WireListResponse = serde_json::from_slice(&body)
                .map_err(|err| StoreError::new(FailureKind::Decode, err.to_string()))?;
            records.extend(page.documents.into_iter().map(WireDocument::into_record));
            match page.next_page_token.filter(|token| !token.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }
        site_debug!("Listed {} documents from {}", records.len(), path.join("/"));
        Ok(records)
    }

    async fn get_document(&self, path: &[&str]) -> Result<Option<RawRecord>, StoreError> {
        if path.is_empty() || path.len() % 2 != 0 {
            return Err(StoreError::new(
                FailureKind::InvalidPath,
                format!("{} does not name a document", path.join("/")),
            ));
        }
        let url = self.documents_url(path)?;
        let Some(body) = self.get_body(url).await? else {
            return Ok(None);
        };
        let document: WireDocument = serde_json::from_slice(&body)
            .map_err(|err| StoreError::new(FailureKind::Decode, err.to_string()))?;
        Ok(Some(document.into_record()))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> StoreError {
    if err.is_timeout() {
        return StoreError::new(FailureKind::Timeout, err.to_string());
    }
    StoreError::new(FailureKind::Network, err.to_string())
}
