/// Continent-scoped cuisine listing
///
/// Every continent selection gets a new [`Generation`]. Fetches report back
/// with the generation they were started under and only the latest one is
/// applied, so rapid switching always ends on the list for the last
/// continent chosen, whatever order the responses arrive in.
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;

use crate::backend::{CuisineResponse, KitchenBackend};
use crate::catalog::Continent;
use crate::error::FetchError;
use crate::parser::{self, ContentKind};

/// Message shown when a listing cannot be fetched
pub const LOAD_ERROR_MESSAGE: &str = "Could not load cuisines.";

/// Token identifying one continent selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(u64);

impl Generation {
    fn next(self) -> Self {
        Generation(self.0 + 1)
    }
}

/// A fetch the caller must run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CuisineFetch {
    pub generation: Generation,
    pub continent: Continent,
}

/// Cuisine list bound to the current continent selection
#[derive(Debug, Default)]
pub struct CuisineLoader {
    continent: Option<Continent>,
    latest: Generation,
    cuisines: Vec<String>,
    error: Option<String>,
    loading: bool,
    query: String,
}

impl CuisineLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Change the continent selection.
    ///
    /// Any fetch still in flight becomes stale and the search query is
    /// cleared. Selecting `None` empties the list and error immediately and
    /// returns no fetch; otherwise the returned fetch must be run and its
    /// result passed to [`CuisineLoader::apply`].
    pub fn select(&mut self, continent: Option<Continent>) -> Option<CuisineFetch> {
        self.latest = self.latest.next();
        self.continent = continent;
        self.query.clear();
        self.error = None;

        match continent {
            None => {
                self.cuisines.clear();
                self.loading = false;
                None
            }
            Some(continent) => {
                tracing::info!("[cuisines] Loading cuisines for {}", continent);
                self.loading = true;
                Some(CuisineFetch {
                    generation: self.latest,
                    continent,
                })
            }
        }
    }

    /// Apply a fetch result. Returns false when the result is stale and was
    /// discarded.
    pub fn apply(
        &mut self,
        generation: Generation,
        result: Result<CuisineResponse, FetchError>,
    ) -> bool {
        if generation != self.latest {
            tracing::debug!(
                "[cuisines] Discarding stale result {:?} (latest {:?})",
                generation,
                self.latest
            );
            return false;
        }

        match result {
            Ok(response) => {
                let kind = ContentKind::from_content_type(response.content_type.as_deref());
                self.cuisines = parser::parse(&response.body, kind);
                tracing::debug!("[cuisines] Parsed cuisines: {:?}", self.cuisines);
            }
            Err(err) => {
                tracing::error!("[cuisines] Fetch error: {}", err);
                self.error = Some(LOAD_ERROR_MESSAGE.to_string());
                self.cuisines.clear();
            }
        }
        self.loading = false;
        true
    }

    pub fn continent(&self) -> Option<Continent> {
        self.continent
    }

    pub fn latest_generation(&self) -> Generation {
        self.latest
    }

    /// Full list for the current continent
    pub fn cuisines(&self) -> &[String] {
        &self.cuisines
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    /// Cuisines matching the search query (case-insensitive substring)
    pub fn visible(&self) -> Vec<&str> {
        let needle = self.query.to_lowercase();
        self.cuisines
            .iter()
            .filter(|c| needle.is_empty() || c.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect()
    }

    /// Helper line for the list area, if the list itself has nothing to say
    pub fn status_text(&self) -> Option<&str> {
        if self.loading {
            return Some("Loading cuisines...");
        }
        if let Some(error) = self.error.as_deref() {
            return Some(error);
        }
        if self.visible().is_empty() {
            return Some(if self.continent.is_some() {
                "No cuisines found."
            } else {
                "Choose a continent first."
            });
        }
        None
    }
}

/// Run a cuisine fetch on a worker thread.
///
/// `on_done` is called exactly once with the fetch's generation. A panicking
/// backend is reported as `FetchError::Aborted`.
pub fn spawn_fetch<F>(
    fetch: CuisineFetch,
    backend: Arc<dyn KitchenBackend>,
    on_done: F,
) -> thread::JoinHandle<()>
where
    F: FnOnce(Generation, Result<CuisineResponse, FetchError>) + Send + 'static,
{
    thread::spawn(move || {
        let result =
            panic::catch_unwind(AssertUnwindSafe(|| backend.fetch_cuisines(fetch.continent)))
                .unwrap_or(Err(FetchError::Aborted));
        on_done(fetch.generation, result);
    })
}
