//! Collection screens: fetch on mount and on filter change, debounced
//! search, confirmed delete followed by a fresh fetch.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use casetrack_core::api::ApiResult;
use casetrack_core::error::ApiError;
use casetrack_core::model::Ack;
use casetrack_core::ui::{Confirm, Notification, Notifier};

use crate::debounce::Debouncer;
use crate::fetch_state::{FetchGate, FetchOutcome};

/// Where a list view gets its rows from.
#[async_trait]
pub trait ListSource: Send + Sync {
    type Item: Clone + Send + Sync;
    /// Declared filters. A change to any of them triggers one fetch.
    type Query: Clone + Default + PartialEq + Send + Sync;

    /// Shown when a fetch fails without a server message.
    fn fetch_failed_message(&self) -> &'static str;

    async fn fetch(&self, query: &Self::Query) -> ApiResult<Vec<Self::Item>>;
}

/// A source whose rows can be deleted.
#[async_trait]
pub trait RemovableSource: ListSource {
    fn removed_message(&self) -> &'static str;

    fn remove_failed_message(&self) -> &'static str;

    async fn remove(&self, id: &str) -> Result<Ack, ApiError>;
}

/// Queries that carry a free-text search term.
pub trait SearchQuery {
    fn search_text(&self) -> &str;

    fn with_search(&self, text: &str) -> Self;
}

/// A bare `?q=` search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextQuery(pub String);

impl SearchQuery for TextQuery {
    fn search_text(&self) -> &str {
        &self.0
    }

    fn with_search(&self, text: &str) -> Self {
        TextQuery(text.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    /// Error from the most recent failed fetch, cleared by the next success.
    pub last_error: Option<ApiError>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            last_error: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The user declined the confirmation; nothing was sent.
    Declined,
    Removed,
    Failed,
}

pub struct ListView<S: ListSource> {
    source: S,
    notifier: Arc<dyn Notifier>,
    gate: FetchGate,
    debouncer: Debouncer,
    query: RwLock<S::Query>,
    state: RwLock<ListState<S::Item>>,
}

impl<S: ListSource> ListView<S> {
    pub fn new(source: S, notifier: Arc<dyn Notifier>, search_debounce: Duration) -> Self {
        Self {
            source,
            notifier,
            gate: FetchGate::new(),
            debouncer: Debouncer::new(search_debounce),
            query: RwLock::new(S::Query::default()),
            state: RwLock::new(ListState::default()),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Initial fetch with the default query.
    pub async fn mount(&self) -> FetchOutcome {
        self.refresh().await
    }

    pub async fn query(&self) -> S::Query {
        self.query.read().await.clone()
    }

    /// Replaces the filters. Fetches only when they actually changed.
    pub async fn set_query(&self, query: S::Query) -> Option<FetchOutcome> {
        {
            let mut current = self.query.write().await;
            if *current == query {
                return None;
            }
            *current = query;
        }
        Some(self.refresh().await)
    }

    /// Fetches with the current query. On failure the previous rows stay.
    pub async fn refresh(&self) -> FetchOutcome {
        let ticket = self.gate.issue();
        let query = self.query.read().await.clone();
        self.state.write().await.loading = true;

        let Some(result) = self.gate.guard(ticket, self.source.fetch(&query)).await else {
            return FetchOutcome::Discarded;
        };

        let mut state = self.state.write().await;
        state.loading = false;
        match result {
            Ok(envelope) => {
                state.items = envelope.into_items();
                state.last_error = None;
                FetchOutcome::Applied
            }
            Err(err) => {
                tracing::warn!(error = %err.message, "List fetch failed");
                self.notifier.notify(Notification::error(failure_text(
                    &err,
                    self.source.fetch_failed_message(),
                )));
                state.last_error = Some(err);
                FetchOutcome::Failed
            }
        }
    }

    pub async fn snapshot(&self) -> ListState<S::Item> {
        self.state.read().await.clone()
    }

    pub async fn items(&self) -> Vec<S::Item> {
        self.state.read().await.items.clone()
    }

    /// Tears the view down; in-flight fetches resolve as discarded.
    pub fn dispose(&self) {
        self.gate.dispose();
    }
}

impl<S> ListView<S>
where
    S: ListSource,
    S::Query: SearchQuery,
{
    /// Feeds one keystroke's worth of search text.
    ///
    /// Waits out the debounce window; calls superseded by later input
    /// return `None` without fetching.
    pub async fn search(&self, text: impl Into<String>) -> Option<FetchOutcome> {
        let settled = self.debouncer.settle(text.into()).await?;
        if self.gate.is_disposed() {
            return None;
        }
        let next = self.query.read().await.with_search(&settled);
        self.set_query(next).await
    }
}

impl<S: RemovableSource> ListView<S> {
    /// Deletes after confirmation, then re-fetches. Rows are never removed
    /// locally.
    pub async fn remove(&self, id: &str, confirm: &dyn Confirm) -> RemoveOutcome {
        if !confirm.confirm("Are you sure you want to delete this?").await {
            return RemoveOutcome::Declined;
        }
        match self.source.remove(id).await {
            Ok(_) => {
                tracing::info!(id, "Removed");
                self.notifier
                    .notify(Notification::success(self.source.removed_message()));
                self.refresh().await;
                RemoveOutcome::Removed
            }
            Err(err) => {
                self.notifier.notify(Notification::error(failure_text(
                    &err,
                    self.source.remove_failed_message(),
                )));
                RemoveOutcome::Failed
            }
        }
    }
}

/// The server's message, or `fallback` when it sent none.
pub(crate) fn failure_text(err: &ApiError, fallback: &str) -> String {
    if err.message.trim().is_empty() {
        fallback.to_string()
    } else {
        err.message.clone()
    }
}
