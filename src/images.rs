//! Profile photo hosting.

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Anything that can store an image and hand back a public URL.
#[async_trait]
pub trait ImageUploader: Send + Sync {
    async fn upload(&self, bytes: Vec<u8>, file_name: &str) -> Result<String>;
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    #[serde(default)]
    success: bool,
    data: Option<UploadData>,
}

#[derive(Debug, Deserialize)]
struct UploadData {
    url: String,
}

/// imgbb-style image host: multipart POST with the API key in the query.
#[derive(Debug, Clone)]
pub struct ImageHost {
    client: reqwest::Client,
    upload_url: String,
    api_key: String,
}

impl ImageHost {
    pub fn new(
        client: reqwest::Client,
        upload_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            upload_url: upload_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Read a photo from disk and upload it.
    pub async fn upload_file(&self, path: &Path) -> Result<String> {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read image {}", path.display()))?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("photo");
        self.upload(bytes, file_name).await
    }
}

#[async_trait]
impl ImageUploader for ImageHost {
    async fn upload(&self, bytes: Vec<u8>, file_name: &str) -> Result<String> {
        upload_image(&self.client, &self.upload_url, &self.api_key, bytes, file_name).await
    }
}

/// Upload raw image bytes and return the hosted URL.
pub async fn upload_image(
    client: &reqwest::Client,
    upload_url: &str,
    api_key: &str,
    bytes: Vec<u8>,
    file_name: &str,
) -> Result<String> {
    if bytes.is_empty() {
        bail!("Refusing to upload empty image {}", file_name);
    }

    debug!("Uploading image {} ({} bytes)", file_name, bytes.len());
    let form = Form::new().part("image", Part::bytes(bytes).file_name(file_name.to_string()));

    let response = client
        .post(upload_url)
        .query(&[("key", api_key)])
        .multipart(form)
        .send()
        .await
        .context("Failed to send image upload request")?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        bail!("Image host returned {}: {}", status, body);
    }

    let parsed: UploadResponse = response
        .json()
        .await
        .context("Failed to parse image host response")?;

    match parsed.data {
        Some(data) if parsed.success && !data.url.is_empty() => {
            info!("Uploaded image {}", file_name);
            Ok(data.url)
        }
        _ => bail!("Image host did not return a URL for {}", file_name),
    }
}
