//! HTTP adapter for the bill store API
//!
//! - `POST {base}/bills`: multipart upload of the receipt, answers `{ fileUrl, key }`
//! - `PATCH {base}/bills/{key}`: JSON body of the complete bill

use async_trait::async_trait;
use billed_application::{BillStore, StoreError};
use billed_domain::{Bill, CreatedFile, ReceiptUpload};
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response, Url};
use tracing::debug;

/// Bill store reached over HTTP
#[derive(Debug, Clone)]
pub struct HttpBillStore {
    client: Client,
    base_url: String,
    jwt: Option<String>,
}

impl HttpBillStore {
    pub fn new(base_url: impl Into<String>) -> Result<Self, StoreError> {
        let client = Client::builder()
            .user_agent(concat!("billed/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| StoreError::Other(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self::with_client(client, base_url))
    }

    /// Use an existing client (shared connection pool)
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            jwt: None,
        }
    }

    /// Send `Authorization: Bearer {jwt}` with every request
    pub fn with_jwt(mut self, jwt: Option<impl Into<String>>) -> Self {
        self.jwt = jwt.map(Into::into);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn bills_url(&self) -> String {
        format!("{}/bills", self.base_url)
    }

    /// URL of one bill, with `bill_id` percent-encoded as a single path segment
    pub fn bill_url(&self, bill_id: &str) -> Result<Url, StoreError> {
        if matches!(bill_id, "" | "." | "..") {
            return Err(StoreError::Other(format!("Invalid bill id: {:?}", bill_id)));
        }
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| StoreError::Other(format!("Invalid base URL {}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| StoreError::Other(format!("Invalid base URL {}", self.base_url)))?
            .pop_if_empty()
            .extend(["bills", bill_id]);
        Ok(url)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.jwt {
            Some(jwt) => request.bearer_auth(jwt),
            None => request,
        }
    }

    fn upload_form(upload: &ReceiptUpload) -> Result<Form, StoreError> {
        let part = Part::bytes(upload.file.bytes().to_vec())
            .file_name(upload.file.name().to_string())
            .mime_str(upload.content_type())
            .map_err(|e| StoreError::Other(format!("Invalid content type: {}", e)))?;
        Ok(Form::new()
            .part("file", part)
            .text("email", upload.email.clone()))
    }
}

fn transport_error(e: reqwest::Error) -> StoreError {
    if e.is_timeout() {
        StoreError::Timeout
    } else if e.is_connect() {
        StoreError::Connection(e.to_string())
    } else {
        StoreError::Other(e.to_string())
    }
}

/// Turn a non-2xx answer into [`StoreError::Http`] carrying the body text
async fn ensure_success(response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = if body.trim().is_empty() {
        status.canonical_reason().unwrap_or("Unknown").to_string()
    } else {
        body
    };
    Err(StoreError::Http {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl BillStore for HttpBillStore {
    async fn create(&self, upload: &ReceiptUpload) -> Result<CreatedFile, StoreError> {
        let url = self.bills_url();
        debug!("POST {} ({})", url, upload.file.name());

        // No explicit content type: reqwest sets the multipart boundary
        let request = self
            .client
            .post(&url)
            .multipart(Self::upload_form(upload)?);
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(transport_error)?;

        ensure_success(response)
            .await?
            .json::<CreatedFile>()
            .await
            .map_err(|e| StoreError::InvalidResponse(e.to_string()))
    }

    async fn update(&self, bill: &Bill, bill_id: &str) -> Result<(), StoreError> {
        let url = self.bill_url(bill_id)?;
        debug!("PATCH {}", url);

        let body = bill
            .to_json()
            .map_err(|e| StoreError::Other(format!("Failed to serialize bill: {}", e)))?;
        let request = self
            .client
            .patch(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(transport_error)?;

        ensure_success(response).await?;
        Ok(())
    }
}
