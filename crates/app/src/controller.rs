//! Search orchestration: token guard, phase, result set and preview.
//!
//! The controller owns no UI. The page keeps it in a signal, turns
//! [`Notice`]s into toasts and renders [`SearchView`].

use chrono::Utc;
use shared_types::{map_citations, AppError, Citation, SearchQuery, SearchResult};

use crate::token_store::TokenStore;

/// Network seam: one citation lookup per call.
#[allow(async_fn_in_trait)]
pub trait CitationSource {
    async fn fetch_citations(&self, keyword: &str, token: &str)
        -> Result<Vec<Citation>, AppError>;
}

/// Source that calls the `search_citations` server function.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ServerCitationSource;

impl CitationSource for ServerCitationSource {
    async fn fetch_citations(
        &self,
        keyword: &str,
        token: &str,
    ) -> Result<Vec<Citation>, AppError> {
        server::api::search_citations(keyword.to_string(), token.to_string())
            .await
            .map_err(|e| {
                let raw = e.to_string();
                AppError::from_server_error(&raw).unwrap_or_else(|| AppError::upstream(raw))
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeVariant {
    Info,
    Destructive,
}

/// User-facing outcome of a search attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    fn new(title: &str, description: impl Into<String>, variant: NoticeVariant) -> Self {
        Self {
            title: title.to_string(),
            description: description.into(),
            variant,
        }
    }

    pub fn token_required() -> Self {
        Self::new(
            "API Token Required",
            "Please enter your Nucleus API token to search.",
            NoticeVariant::Destructive,
        )
    }

    pub fn search_complete(count: usize) -> Self {
        Self::new(
            "Search Complete",
            format!("Found {count} citations"),
            NoticeVariant::Info,
        )
    }

    pub fn search_failed() -> Self {
        Self::new(
            "Search Failed",
            "Failed to fetch data from the API. Please check your token and try again.",
            NoticeVariant::Destructive,
        )
    }

    /// Rejected form input, e.g. a blank keyword.
    pub fn invalid_query(message: impl Into<String>) -> Self {
        Self::new("Invalid Search", message, NoticeVariant::Destructive)
    }

    pub fn is_error(&self) -> bool {
        self.variant == NoticeVariant::Destructive
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchPhase {
    #[default]
    Idle,
    Searching,
}

/// Everything the page renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchView {
    pub phase: SearchPhase,
    pub results: Vec<SearchResult>,
    pub selected: Option<SearchResult>,
}

impl SearchView {
    pub fn is_loading(&self) -> bool {
        self.phase == SearchPhase::Searching
    }
}

/// A search that passed the token guard and still has to hit the network.
///
/// Detached from the controller so several can be awaited at once.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSearch {
    query: SearchQuery,
    token: String,
}

impl PendingSearch {
    pub async fn run<S: CitationSource>(self, source: &S) -> SearchOutcome {
        tracing::info!(
            keyword = %self.query.keyword,
            filters = self.query.filter_count(),
            "Searching citations"
        );
        let result = source
            .fetch_citations(&self.query.keyword, &self.token)
            .await;
        SearchOutcome {
            keyword: self.query.keyword,
            result,
        }
    }
}

/// Result of one [`PendingSearch::run`].
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub keyword: String,
    pub result: Result<Vec<Citation>, AppError>,
}

pub struct SearchController<S, T> {
    source: S,
    store: T,
    token: String,
    view: SearchView,
}

impl<S: CitationSource, T: TokenStore> SearchController<S, T> {
    /// Build a controller, reading the persisted token once.
    pub fn new(source: S, store: T) -> Self {
        let token = store.load();
        Self {
            source,
            store,
            token,
            view: SearchView::default(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn has_token(&self) -> bool {
        !self.token.trim().is_empty()
    }

    /// Replace the token and persist it immediately.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = token.into();
        self.store.save(&self.token);
    }

    pub fn view(&self) -> &SearchView {
        &self.view
    }

    /// Guard and start a search.
    ///
    /// With a blank token nothing changes and the token notice is returned.
    pub fn begin_search(&mut self, query: &SearchQuery) -> Result<PendingSearch, Notice> {
        if !self.has_token() {
            return Err(Notice::token_required());
        }
        self.view.phase = SearchPhase::Searching;
        Ok(PendingSearch {
            query: query.clone(),
            token: self.token.clone(),
        })
    }

    /// Apply a finished search. The result set is replaced wholesale.
    pub fn finish(&mut self, outcome: SearchOutcome) -> Notice {
        self.view.phase = SearchPhase::Idle;
        match outcome.result {
            Ok(citations) => {
                self.view.results = map_citations(&citations, Utc::now());
                tracing::info!(
                    keyword = %outcome.keyword,
                    count = self.view.results.len(),
                    "Search complete"
                );
                Notice::search_complete(self.view.results.len())
            }
            Err(e) => {
                tracing::error!(
                    keyword = %outcome.keyword,
                    status = e.status_code_u16(),
                    error = %e,
                    "Search failed"
                );
                self.view.results.clear();
                Notice::search_failed()
            }
        }
    }

    /// Run a whole search against the controller's own source.
    #[cfg(test)]
    pub async fn search(&mut self, query: &SearchQuery) -> Notice {
        match self.begin_search(query) {
            Err(notice) => notice,
            Ok(pending) => {
                let outcome = pending.run(&self.source).await;
                self.finish(outcome)
            }
        }
    }

    pub fn select(&mut self, result: SearchResult) {
        self.view.selected = Some(result);
    }

    pub fn close_preview(&mut self) {
        self.view.selected = None;
    }
}
