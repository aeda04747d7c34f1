use crate::config::ClientConfig;
use crate::error::ServiceError;
use crate::models::*;
use crate::state::SelectedFile;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};

pub const UPLOAD_FIELD: &str = "file";

pub struct ApiService {
    client: Client,
    config: ClientConfig,
}

impl ApiService {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub async fn upload(&self, files: &[SelectedFile]) -> Result<UploadResponse, ServiceError> {
        let mut form = Form::new();
        let mut total_bytes = 0;

        for file in files {
            let bytes = tokio::fs::read(file.path())
                .await
                .map_err(|source| ServiceError::File {
                    path: file.path().to_path_buf(),
                    source,
                })?;
            total_bytes += bytes.len();

            let part = Part::bytes(bytes)
                .file_name(file.display_name())
                .mime_str(content_type(file))?;
            form = form.part(UPLOAD_FIELD, part);
        }

        log::debug!("Uploading {} files ({} bytes)", files.len(), total_bytes);

        let response = self
            .client
            .post(self.config.upload_url())
            .multipart(form)
            .send()
            .await?;

        let reply: UploadResponse = check_status(response).await?.json().await?;
        if let Some(filename) = &reply.filename {
            log::info!("Service stored upload as {}", filename);
        }

        Ok(reply)
    }

    pub async fn process(&self) -> Result<ProcessOutcome, ServiceError> {
        let response = self.client.post(self.config.process_url()).send().await?;
        let reply: ProcessResponse = check_status(response).await?.json().await?;

        // An empty error field means no error
        if let Some(error) = reply.error.filter(|e| !e.is_empty()) {
            return Ok(ProcessOutcome::Rejected(error));
        }

        match reply.message {
            Some(message) => Ok(ProcessOutcome::Processed {
                message,
                total_chunks: reply.total_chunks_stored,
            }),
            None => Err(ServiceError::Malformed(
                "process reply has neither `error` nor `message`".to_string(),
            )),
        }
    }

    pub async fn query(&self, user_query: &str) -> Result<QueryResponse, ServiceError> {
        let request = QueryRequest {
            user_query: user_query.to_string(),
        };

        let response = self
            .client
            .post(self.config.query_url())
            .json(&request)
            .send()
            .await?;

        let reply: QueryResponse = check_status(response).await?.json().await?;
        log::debug!("Query returned {} sources", reply.sources.len());

        Ok(reply)
    }
}

async fn check_status(response: Response) -> Result<Response, ServiceError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ServiceError::Status { status, body });
    }
    Ok(response)
}

fn content_type(file: &SelectedFile) -> &'static str {
    let is_pdf = file
        .path()
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);

    if is_pdf {
        "application/pdf"
    } else {
        "application/octet-stream"
    }
}
