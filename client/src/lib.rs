pub mod api_service;
pub mod busy;
pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod notice;
pub mod state;

pub use api_service::ApiService;
pub use busy::{BusyFlag, BusyGuard};
pub use config::ClientConfig;
pub use controller::WorkflowController;
pub use error::{Action, Rejection, ServiceError};
pub use models::*;
pub use notice::{Notice, Notifier};
pub use state::{SelectedFile, WorkflowSnapshot};
