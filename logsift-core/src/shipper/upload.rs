use crate::event::ClientId;
use crate::shipper::ShipperError;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use std::time::Duration;

/// File name the batch is sent under.
pub const UPLOAD_FILE_NAME: &str = "access.log";

/// Ingestion boundary as seen by the agent.
#[async_trait]
pub trait Uploader: Send + Sync {
    /// Sends one batch. `Ok` means the receiver accepted it.
    async fn upload(&self, client_id: &ClientId, body: String) -> Result<(), ShipperError>;
}

/// POSTs batches as `multipart/form-data` with a `clientId` text part and a
/// `file` part.
#[derive(Debug, Clone)]
pub struct HttpUploader {
    client: reqwest::Client,
    url: String,
}

impl HttpUploader {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, ShipperError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ShipperError::Client(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Uploader for HttpUploader {
    async fn upload(&self, client_id: &ClientId, body: String) -> Result<(), ShipperError> {
        let file = Part::text(body)
            .file_name(UPLOAD_FILE_NAME)
            .mime_str("text/plain")?;

        let form = Form::new()
            .text("clientId", client_id.as_str().to_string())
            .part("file", file);

        let resp = self.client.post(&self.url).multipart(form).send().await?;

        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ShipperError::Rejected {
                status: status.as_u16(),
            })
        }
    }
}
