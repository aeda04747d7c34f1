use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    path: PathBuf,
}

impl SelectedFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.to_string_lossy().to_string())
    }
}

#[derive(Debug, Default)]
pub(crate) struct WorkflowState {
    selected_files: Vec<SelectedFile>,
    file_names: Vec<String>,
    pub(crate) upload_result: String,
    pub(crate) query_text: String,
    pub(crate) query_response: String,
    pub(crate) query_sources: Vec<String>,
    pub(crate) chunks_stored: Option<u64>,
}

impl WorkflowState {
    // Names are recomputed in selection order
    pub(crate) fn select(&mut self, files: Vec<SelectedFile>) {
        self.file_names = files.iter().map(SelectedFile::display_name).collect();
        self.selected_files = files;
    }

    pub(crate) fn selected_files(&self) -> &[SelectedFile] {
        &self.selected_files
    }

    pub(crate) fn file_names(&self) -> &[String] {
        &self.file_names
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowSnapshot {
    pub file_names: Vec<String>,
    pub upload_result: String,
    pub query_text: String,
    pub query_response: String,
    pub query_sources: Vec<String>,
    pub chunks_stored: Option<u64>,
    pub uploading: bool,
    pub processing: bool,
    pub query_loading: bool,
}
