use super::config::ClientConfig;
use crate::core::models::{Dataset, JobStatus, UploadResult};
use crate::engine::error::TransportError;
use crate::engine::transport::{
    AreaPayload, InteractionsPayload, Transport, TrendsPayload, UploadProgressFn,
};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::{debug, trace};

const UPLOAD_CHUNK_BYTES: usize = 64 * 1024;

/// [`Transport`] over HTTP/JSON.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            TransportError::request(format!("Invalid API URL '{}': {}", config.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(TransportError::request(format!(
                "Invalid API URL '{}': cannot be used as a base",
                config.base_url
            )));
        }
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TransportError::request(e.to_string()))?;
        debug!("HTTP transport targeting {}", base_url);
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<R: DeserializeOwned>(&self, segments: &[&str]) -> Result<R, TransportError> {
        let url = self.endpoint(segments);
        trace!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify(e))?;
        self.decode(response).await
    }

    async fn decode<R: DeserializeOwned>(&self, response: Response) -> Result<R, TransportError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::server(
                status.as_u16(),
                server_message(status, &body),
            ));
        }
        response.json::<R>().await.map_err(|e| self.classify(e))
    }

    fn classify(&self, error: reqwest::Error) -> TransportError {
        if error.is_builder() {
            TransportError::request(error.to_string())
        } else if error.is_decode() {
            TransportError::request(format!("Malformed response from server: {}", error))
        } else if error.is_timeout() || error.is_connect() || error.is_request() {
            TransportError::no_response(no_response_message(&self.base_url))
        } else {
            TransportError::request(error.to_string())
        }
    }
}

/// Picks the message of a failed response: the JSON `error` field, then
/// `message`, then a generic status line.
pub fn server_message(status: StatusCode, body: &str) -> String {
    let field = |name: &str| {
        serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get(name).and_then(|m| m.as_str()).map(str::to_string))
            .filter(|m| !m.is_empty())
    };
    field("error")
        .or_else(|| field("message"))
        .unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16()))
}

pub fn no_response_message(base_url: &Url) -> String {
    format!(
        "No response from server. Make sure the backend is running at {}.",
        base_url
    )
}

fn percent(sent: u64, total: u64) -> u32 {
    if total == 0 {
        return 100;
    }
    ((sent * 100 + total / 2) / total) as u32
}

#[async_trait]
impl Transport for HttpTransport {
    async fn list_datasets(&self) -> Result<Vec<Dataset>, TransportError> {
        self.get_json(&["systems"]).await
    }

    async fn get_dataset(&self, id: &str) -> Result<Dataset, TransportError> {
        self.get_json(&["systems", id]).await
    }

    async fn get_interactions(&self, id: &str) -> Result<InteractionsPayload, TransportError> {
        self.get_json(&["systems", id, "interactions"]).await
    }

    async fn get_area_data(&self, id: &str) -> Result<AreaPayload, TransportError> {
        self.get_json(&["systems", id, "area"]).await
    }

    async fn get_trends(&self, id: &str) -> Result<TrendsPayload, TransportError> {
        self.get_json(&["systems", id, "trends"]).await
    }

    async fn upload_file(
        &self,
        path: &Path,
        on_progress: UploadProgressFn,
    ) -> Result<UploadResult, TransportError> {
        let contents = tokio::fs::read(path).await.map_err(|e| {
            TransportError::request(format!("Cannot read '{}': {}", path.display(), e))
        })?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                TransportError::request(format!("'{}' is not a file path", path.display()))
            })?;

        let total = contents.len() as u64;
        let chunks: Vec<Vec<u8>> = contents
            .chunks(UPLOAD_CHUNK_BYTES)
            .map(<[u8]>::to_vec)
            .collect();
        let mut sent = 0u64;
        let body = futures_util::stream::iter(chunks.into_iter().map(move |chunk| {
            sent += chunk.len() as u64;
            on_progress(percent(sent, total));
            Ok::<_, std::io::Error>(chunk)
        }));

        let part = Part::stream_with_length(reqwest::Body::wrap_stream(body), total)
            .file_name(file_name)
            .mime_str("application/octet-stream")
            .map_err(|e| TransportError::request(e.to_string()))?;
        let form = Form::new().part("file", part);

        let url = self.endpoint(&["upload"]);
        debug!("Uploading {} ({} bytes) to {}", path.display(), total, url);
        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| self.classify(e))?;
        self.decode(response).await
    }

    async fn get_status(&self, job_id: &str) -> Result<JobStatus, TransportError> {
        self.get_json(&["status", job_id]).await
    }
}
