use std::fmt;

use crate::error::{Action, Rejection};

pub const SELECT_FILES: &str = "Select at least one file!";
pub const ENTER_QUERY: &str = "Enter a query!";
pub const PROCESSING_FAILED: &str = "Error processing files.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    SelectFiles,
    EnterQuery,
    AlreadyInFlight(Action),
    ServiceError(String),
    ServiceMessage(String),
    ProcessingFailed,
}

impl From<Rejection> for Notice {
    fn from(rejection: Rejection) -> Self {
        match rejection {
            Rejection::NoFilesSelected => Notice::SelectFiles,
            Rejection::EmptyQuery => Notice::EnterQuery,
            Rejection::AlreadyInFlight(action) => Notice::AlreadyInFlight(action),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::SelectFiles => f.write_str(SELECT_FILES),
            Notice::EnterQuery => f.write_str(ENTER_QUERY),
            Notice::AlreadyInFlight(action) => {
                write!(f, "The {} request is still running.", action)
            }
            Notice::ServiceError(text) | Notice::ServiceMessage(text) => f.write_str(text),
            Notice::ProcessingFailed => f.write_str(PROCESSING_FAILED),
        }
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}
