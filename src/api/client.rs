//! HTTP transport for the REST backend and the file server.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::errors::{ClientError, ClientResult};
use crate::models::{EntityKind, Id};

/// API version prefix shared by every resource path.
pub const API_PREFIX: &str = "v1.0";

/// Path of a resource collection, e.g. `v1.0/past-itineraries`.
pub fn collection_path(kind: EntityKind) -> String {
    format!("{}/{}", API_PREFIX, kind.collection())
}

/// Path of a single record, e.g. `v1.0/past-itineraries/3`.
pub fn item_path(kind: EntityKind, id: Id) -> String {
    format!("{}/{}/{}", API_PREFIX, kind.collection(), id)
}

/// Thin typed wrapper over `reqwest` that maps responses into `ClientError`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    api_url: Url,
    files_url: Url,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let mut headers = HeaderMap::new();
        if let Some(token) = &config.api_token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| ClientError::Config("API token is not a valid header value".to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }

        let http = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            api_url: with_trailing_slash(config.api_url.clone()),
            files_url: with_trailing_slash(config.files_url.clone()),
        })
    }

    fn url(&self, path: &str) -> ClientResult<Url> {
        join(&self.api_url, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.http.get(self.url(path)?).send().await?;
        decode(response).await
    }

    pub async fn get_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T> {
        let response = self.http.get(self.url(path)?).query(query).send().await?;
        decode(response).await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.http.post(self.url(path)?).json(body).send().await?;
        decode(response).await
    }

    pub async fn patch<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.http.patch(self.url(path)?).json(body).send().await?;
        decode(response).await
    }

    /// DELETE a resource; any success body is ignored.
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        let response = self.http.delete(self.url(path)?).send().await?;
        check_status(response).await.map(|_| ())
    }

    /// Multipart upload of a single `file` part to the file server.
    pub async fn upload<T: DeserializeOwned>(&self, part: Part) -> ClientResult<T> {
        let form = Form::new().part("file", part);
        let url = join(&self.files_url, &collection_path(EntityKind::File))?;

        let response = self.http.post(url).multipart(form).send().await?;
        decode(response).await
    }
}

/// Build the multipart `file` part. A malformed MIME type is the caller's mistake.
pub fn file_part(file_name: &str, bytes: Vec<u8>, mime: &str) -> ClientResult<Part> {
    Part::bytes(bytes)
        .file_name(file_name.to_string())
        .mime_str(mime)
        .map_err(|_| ClientError::Validation(format!("{:?} is not a valid MIME type", mime)))
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

fn join(base: &Url, path: &str) -> ClientResult<Url> {
    base.join(path.trim_start_matches('/'))
        .map_err(|e| ClientError::Config(format!("cannot build URL for {}: {}", path, e)))
}

async fn check_status(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    tracing::warn!(%status, "Backend returned error status");
    Err(ClientError::Http {
        status,
        message: if message.is_empty() {
            status.canonical_reason().unwrap_or("request failed").to_string()
        } else {
            message
        },
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let response = check_status(response).await?;
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}
