//! Wire types for the Nucleus talk2docs citation service.
//!
//! Field names follow the remote contract exactly (camelCase), including the
//! misspelled `citiation` list on the response.

use serde::{Deserialize, Serialize};

/// Path of the document chat endpoint, relative to the service base URL.
pub const CITATION_STREAM_PATH: &str =
    "/api/api/v1/talk2docs-service/chat/organizations/test_hackathon_2025_0508/documents/stream";

/// Speaker of a chat message. Searches only ever send user turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
}

/// One entry of a conversation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// Request body posted to [`CITATION_STREAM_PATH`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitationRequest {
    pub history: Vec<ChatMessage>,
    pub query_messages: Vec<ChatMessage>,
    pub document_phrase: Option<String>,
    pub document_id_list: Option<Vec<String>>,
    pub document_labels: Option<Vec<String>>,
}

impl CitationRequest {
    /// Build the single-turn request for a keyword.
    ///
    /// The keyword is the only message in both `history` and
    /// `queryMessages`. The document filters are always sent as `null`.
    pub fn for_keyword(keyword: &str) -> Self {
        Self {
            history: vec![ChatMessage::user(keyword)],
            query_messages: vec![ChatMessage::user(keyword)],
            document_phrase: None,
            document_id_list: None,
            document_labels: None,
        }
    }
}

/// The document a citation points into.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitationDocument {
    pub document_unique_id: Option<String>,
    pub doc_structure_relative_path: Option<String>,
    pub document_name: Option<String>,
}

/// A citation record as returned by the remote service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Citation {
    pub document: Option<CitationDocument>,
    pub text: Option<String>,
    pub uid: Option<String>,
    pub reference_url: Option<String>,
    pub internal_reference: Option<bool>,
}

impl Citation {
    /// Display name of the cited document, if the service sent one.
    pub fn document_name(&self) -> Option<&str> {
        self.document
            .as_ref()
            .and_then(|d| d.document_name.as_deref())
    }

    pub fn is_internal(&self) -> bool {
        self.internal_reference.unwrap_or(false)
    }
}

/// Response body of the document chat endpoint.
///
/// Only the citation list is read; any other fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationResponse {
    #[serde(default)]
    pub citiation: Option<Vec<Citation>>,
}

impl CitationResponse {
    /// Decode a response body. A missing or `null` citation list decodes to
    /// an empty list; a body that is not an object of the expected shape is
    /// an error.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    pub fn into_citations(self) -> Vec<Citation> {
        self.citiation.unwrap_or_default()
    }
}
