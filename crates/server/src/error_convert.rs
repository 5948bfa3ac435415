use dioxus::prelude::ServerFnError;
use shared_types::AppError;

use crate::nucleus::CitationError;

/// Convert a citation client failure into an AppError.
///
/// A 401/403 from the service means the pasted token was rejected; every
/// other failure is reported as an upstream error carrying the detail.
pub fn citation_to_app_error(err: CitationError) -> AppError {
    match &err {
        CitationError::Status { status, .. } if *status == 401 || *status == 403 => {
            AppError::unauthorized("The citation service rejected the API token")
        }
        _ => AppError::upstream(err.to_string()),
    }
}

/// Convert an AppError into a ServerFnError by serializing as JSON.
pub fn app_error_to_server_fn_error(err: AppError) -> ServerFnError {
    let json = serde_json::to_string(&err).unwrap_or_else(|_| err.message.clone());
    ServerFnError::new(json)
}

impl From<CitationError> for AppError {
    fn from(err: CitationError) -> Self {
        citation_to_app_error(err)
    }
}

/// Extension trait providing `.into_app_error()` on CitationError.
pub trait CitationErrorExt {
    fn into_app_error(self) -> AppError;
}

impl CitationErrorExt for CitationError {
    fn into_app_error(self) -> AppError {
        citation_to_app_error(self)
    }
}

/// Extension trait providing `.into_server_fn_error()` on AppError.
pub trait AppErrorExt {
    fn into_server_fn_error(self) -> ServerFnError;
}

impl AppErrorExt for AppError {
    fn into_server_fn_error(self) -> ServerFnError {
        app_error_to_server_fn_error(self)
    }
}
