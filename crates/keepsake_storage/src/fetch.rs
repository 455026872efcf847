//! HTTP fetching of remote assets.

use crate::FetchConfig;
use keepsake_error::{HttpError, HttpErrorKind};
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue, REFERER};
use reqwest::redirect::Policy;
use tracing::instrument;

/// Body and declared type of a fetched resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedAsset {
    /// Raw response body
    pub bytes: Vec<u8>,
    /// `Content-Type` header, if present and valid ASCII
    pub content_type: Option<String>,
}

/// HTTP client preconfigured with the fetch identity and limits.
#[derive(Debug, Clone)]
pub struct RemoteFetcher {
    client: reqwest::Client,
}

impl RemoteFetcher {
    /// Build a fetcher from configuration.
    ///
    /// # Errors
    ///
    /// Fails when a header value is not valid or the TLS backend cannot be
    /// initialised.
    pub fn new(config: &FetchConfig) -> Result<Self, HttpError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, header_value("Accept", &config.accept)?);
        headers.insert(REFERER, header_value("Referer", &config.referer)?);

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .redirect(Policy::limited(config.max_redirects))
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()
            .map_err(|e| HttpError::new(HttpErrorKind::Client(e.to_string())))?;

        Ok(Self { client })
    }

    /// GET `url` and read the whole body.
    ///
    /// Non-success statuses are errors; the body is not read for them.
    #[instrument(skip(self))]
    pub async fn fetch(&self, url: &str) -> Result<FetchedAsset, HttpError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            tracing::debug!(error = %e, "Request failed");
            HttpError::new(HttpErrorKind::Request(e.to_string()))
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(HttpError::new(HttpErrorKind::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            }));
        }

        // HeaderMap lookups are case-insensitive.
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let bytes = response
            .bytes()
            .await
            .map_err(|e| HttpError::new(HttpErrorKind::Body(e.to_string())))?;

        tracing::debug!(
            size = bytes.len(),
            content_type = content_type.as_deref().unwrap_or("<none>"),
            "Fetched remote asset"
        );

        Ok(FetchedAsset {
            bytes: bytes.to_vec(),
            content_type,
        })
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, HttpError> {
    HeaderValue::from_str(value).map_err(|e| {
        HttpError::new(HttpErrorKind::Client(format!(
            "invalid {} header {:?}: {}",
            name, value, e
        )))
    })
}
