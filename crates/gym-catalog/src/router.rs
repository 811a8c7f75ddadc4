//! Address bar port.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::error::CatalogResult;
use crate::search::QueryMap;

/// The browser router as seen by the page containers.
#[async_trait]
pub trait Router: Send + Sync {
    /// Current query parameters, decoded once.
    fn query(&self) -> QueryMap;

    /// Shallow navigation: update the query without reloading the page.
    async fn push_shallow(&self, query: QueryMap) -> CatalogResult<()>;

    /// Replace the current history entry.
    async fn replace(&self, query: QueryMap) -> CatalogResult<()>;
}

/// How a navigation was performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKind {
    Push,
    Replace,
}

/// One recorded navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub kind: NavigationKind,
    pub url: String,
}

#[derive(Debug, Default)]
struct RouterState {
    query: QueryMap,
    history: Vec<Navigation>,
}

/// In-process router keeping the current URL and a navigation log.
///
/// Used by the CLI and by tests.
#[derive(Debug)]
pub struct MemoryRouter {
    path: String,
    state: Mutex<RouterState>,
}

impl MemoryRouter {
    /// Create a router at `path` with an empty query.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            state: Mutex::new(RouterState::default()),
        }
    }

    /// Create a router from a URL such as `/catalog?offset=2&first=popular`.
    pub fn from_url(url: &str) -> Self {
        let (path, query) = match url.split_once('?') {
            Some((path, query)) => (path, query),
            None => (url, ""),
        };
        let router = Self::new(path);
        router.lock().query = QueryMap::parse(query);
        router
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, RouterState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The current URL, query encoded the way the address bar shows it.
    pub fn url(&self) -> String {
        self.format_url(&self.lock().query)
    }

    /// Navigations performed so far, oldest first.
    pub fn history(&self) -> Vec<Navigation> {
        self.lock().history.clone()
    }

    fn format_url(&self, query: &QueryMap) -> String {
        if query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, query.to_query_string())
        }
    }

    fn navigate(&self, kind: NavigationKind, query: QueryMap) {
        let url = self.format_url(&query);
        tracing::debug!(?kind, url = %url, "Navigating");

        let mut state = self.lock();
        state.query = query;
        state.history.push(Navigation { kind, url });
    }
}

#[async_trait]
impl Router for MemoryRouter {
    fn query(&self) -> QueryMap {
        self.lock().query.clone()
    }

    async fn push_shallow(&self, query: QueryMap) -> CatalogResult<()> {
        self.navigate(NavigationKind::Push, query);
        Ok(())
    }

    async fn replace(&self, query: QueryMap) -> CatalogResult<()> {
        self.navigate(NavigationKind::Replace, query);
        Ok(())
    }
}
