use crate::api_service::ApiService;
use crate::busy::BusyFlag;
use crate::config::ClientConfig;
use crate::error::{Action, Rejection};
use crate::models::ProcessOutcome;
use crate::notice::{Notice, Notifier};
use crate::state::{SelectedFile, WorkflowSnapshot, WorkflowState};
use std::sync::Arc;
use tokio::sync::RwLock;

pub const UPLOAD_SUCCEEDED: &str = "Files uploaded successfully!";
pub const UPLOAD_FAILED: &str = "Error uploading files.";
pub const QUERY_FAILED: &str = "Error querying the document.";

// One busy flag per action: different actions overlap, the same one does not.
pub struct WorkflowController {
    api: ApiService,
    notifier: Arc<dyn Notifier>,
    state: RwLock<WorkflowState>,
    uploading: BusyFlag,
    processing: BusyFlag,
    query_loading: BusyFlag,
}

impl WorkflowController {
    pub fn new(config: ClientConfig, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api: ApiService::new(config),
            notifier,
            state: RwLock::new(WorkflowState::default()),
            uploading: BusyFlag::new(),
            processing: BusyFlag::new(),
            query_loading: BusyFlag::new(),
        }
    }

    pub async fn snapshot(&self) -> WorkflowSnapshot {
        // Flags first: a cleared flag guarantees its result is already written
        let uploading = self.uploading.is_busy();
        let processing = self.processing.is_busy();
        let query_loading = self.query_loading.is_busy();

        let state = self.state.read().await;
        WorkflowSnapshot {
            file_names: state.file_names().to_vec(),
            upload_result: state.upload_result.clone(),
            query_text: state.query_text.clone(),
            query_response: state.query_response.clone(),
            query_sources: state.query_sources.clone(),
            chunks_stored: state.chunks_stored,
            uploading,
            processing,
            query_loading,
        }
    }

    pub async fn select_files(&self, files: Vec<SelectedFile>) {
        log::info!("Selected {} files", files.len());
        self.state.write().await.select(files);
    }

    pub async fn set_query_text(&self, text: &str) {
        self.state.write().await.query_text = text.to_string();
    }

    pub async fn upload(&self) {
        let files = self.state.read().await.selected_files().to_vec();
        if files.is_empty() {
            return self.reject(Rejection::NoFilesSelected);
        }

        // Result is written before the flag drops
        let settled = self
            .uploading
            .scoped(async {
                log::info!("Uploading {} files", files.len());
                let result = match self.api.upload(&files).await {
                    Ok(reply) => reply
                        .preview()
                        .map(str::to_string)
                        .unwrap_or_else(|| UPLOAD_SUCCEEDED.to_string()),
                    Err(e) => {
                        log::error!("Upload failed: {}", e);
                        UPLOAD_FAILED.to_string()
                    }
                };
                self.state.write().await.upload_result = result;
            })
            .await;

        if settled.is_none() {
            self.reject(Rejection::AlreadyInFlight(Action::Upload));
        }
    }

    pub async fn process_documents(&self) {
        let settled = self
            .processing
            .scoped(async {
                log::info!("Requesting document processing");
                match self.api.process().await {
                    Ok(ProcessOutcome::Rejected(error)) => {
                        log::warn!("Service declined processing: {}", error);
                        self.notifier.notify(Notice::ServiceError(error));
                    }
                    Ok(ProcessOutcome::Processed {
                        message,
                        total_chunks,
                    }) => {
                        if let Some(chunks) = total_chunks {
                            log::info!("Service stored {} chunks", chunks);
                        }
                        self.state.write().await.chunks_stored = total_chunks;
                        self.notifier.notify(Notice::ServiceMessage(message));
                    }
                    Err(e) => {
                        log::error!("Error processing PDFs: {:?}", e);
                        self.notifier.notify(Notice::ProcessingFailed);
                    }
                }
            })
            .await;

        if settled.is_none() {
            self.reject(Rejection::AlreadyInFlight(Action::Process));
        }
    }

    // Sends whatever is currently in the input field
    pub async fn submit_query(&self) {
        let text = self.state.read().await.query_text.clone();
        self.query(&text).await;
    }

    pub async fn query(&self, text: &str) {
        if text.trim().is_empty() {
            return self.reject(Rejection::EmptyQuery);
        }

        let settled = self
            .query_loading
            .scoped(async {
                log::info!("Querying documents");
                let (response, sources) = match self.api.query(text).await {
                    Ok(reply) => (reply.response, reply.sources),
                    Err(e) => {
                        log::error!("Query failed: {}", e);
                        (QUERY_FAILED.to_string(), Vec::new())
                    }
                };

                let mut state = self.state.write().await;
                state.query_response = response;
                state.query_sources = sources;
            })
            .await;

        if settled.is_none() {
            self.reject(Rejection::AlreadyInFlight(Action::Query));
        }
    }

    fn reject(&self, rejection: Rejection) {
        log::warn!("Rejected trigger: {}", rejection);
        self.notifier.notify(rejection.into());
    }
}
