//! Native HTTP client for the diagnosis and chat endpoints

use crate::error::{KisanError, Result};
use crate::image_file::read_image;
use kisan_common::{ChatReply, ChatRequest, Config, Diagnosis};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use std::path::Path;

/// Multipart field the classification endpoint reads the image from
pub const IMAGE_FIELD: &str = "image";

#[derive(Debug, Clone)]
pub struct KisanClient {
    http: Client,
    config: Config,
}

impl KisanClient {
    pub fn new(config: Config) -> Result<Self> {
        Self::with_http_client(config, Client::new())
    }

    pub fn with_http_client(config: Config, http: Client) -> Result<Self> {
        config.validate()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Submit image bytes as multipart form data and parse the diagnosis
    pub async fn diagnose(&self, file_name: &str, mime_type: &str, bytes: Vec<u8>) -> Result<Diagnosis> {
        tracing::debug!(
            endpoint = %self.config.diagnosis_endpoint,
            file_name,
            size = bytes.len(),
            "uploading image"
        );

        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime_type)?;
        let form = Form::new().part(IMAGE_FIELD, part);

        let response = self
            .http
            .post(&self.config.diagnosis_endpoint)
            .multipart(form)
            .send()
            .await?;
        let body = checked_body(response).await?;

        let diagnosis = Diagnosis::from_json(&body)?;
        tracing::debug!(title = %diagnosis.title, confidence = %diagnosis.confidence_label(), "diagnosis received");
        Ok(diagnosis)
    }

    pub async fn diagnose_file(&self, path: &Path) -> Result<Diagnosis> {
        let image = read_image(path).await?;
        self.diagnose(&image.file_name, &image.mime_type, image.bytes).await
    }

    /// Post the full transcript and parse the assistant reply
    pub async fn send_chat(&self, request: &ChatRequest) -> Result<ChatReply> {
        tracing::debug!(
            endpoint = %self.config.chat_endpoint,
            messages = request.messages.len(),
            "sending transcript"
        );

        let response = self
            .http
            .post(&self.config.chat_endpoint)
            .json(request)
            .send()
            .await?;
        let body = checked_body(response).await?;

        Ok(ChatReply::from_json(&body)?)
    }
}

/// Body of a successful response; any other status is an error
async fn checked_body(response: Response) -> Result<String> {
    let status = response.status();
    if !status.is_success() {
        return Err(KisanError::Status {
            status: status.as_u16(),
            body: response.text().await.unwrap_or_default(),
        });
    }
    Ok(response.text().await?)
}
