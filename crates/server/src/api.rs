use dioxus::prelude::*;
use shared_types::Citation;

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, CitationErrorExt};

/// Forward a keyword search to the citation service using the caller's
/// bearer token.
///
/// Only the keyword travels upstream; the token is passed through unchanged.
#[cfg_attr(feature = "server", tracing::instrument(skip(token)))]
#[server]
pub async fn search_citations(
    keyword: String,
    token: String,
) -> Result<Vec<Citation>, ServerFnError> {
    let client = crate::nucleus::CitationClient::from_config();
    client
        .fetch_citations(&keyword, &token)
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())
}
