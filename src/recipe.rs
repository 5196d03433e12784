/// Recipe generation requests
///
/// Builds the recipe query from a wizard snapshot, runs it against the
/// backend and folds the outcome into the wizard state. Errors are not kept
/// apart from recipes: a failure becomes "Error: ..." text in the same
/// overlay a recipe would use.
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;

use crate::backend::KitchenBackend;
use crate::error::FetchError;
use crate::wizard::WizardState;

/// Shown when the service answers with an empty body
pub const EMPTY_RECIPE_TEXT: &str = "No recipe returned.";

/// Query parameters of the recipe endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeQuery {
    /// Ingredients joined with ","
    pub ingredients: String,
    pub cuisine: String,
    pub dietary_restrictions: String,
}

impl RecipeQuery {
    /// Snapshot the request fields from the wizard
    pub fn from_state(state: &WizardState) -> Self {
        Self {
            ingredients: state.ingredients().joined(),
            cuisine: state.selected_cuisine().to_string(),
            dietary_restrictions: state.effective_diet(),
        }
    }

    /// Name/value pairs in wire order. The service spells the last one
    /// `dieteryRestrictions`.
    pub fn pairs(&self) -> [(&'static str, &str); 3] {
        [
            ("ingredients", self.ingredients.as_str()),
            ("cuisine", self.cuisine.as_str()),
            ("dieteryRestrictions", self.dietary_restrictions.as_str()),
        ]
    }
}

/// Text the overlay shows for a request outcome
pub fn result_text(result: &Result<String, FetchError>) -> String {
    match result {
        Ok(body) if body.is_empty() => EMPTY_RECIPE_TEXT.to_string(),
        Ok(body) => body.clone(),
        Err(err) => format!("Error: {}", err),
    }
}

/// Holds `loading` for the lifetime of one request.
///
/// Dropping the guard clears `loading`, including when the backend panics
/// and the stack unwinds through the request.
pub struct RequestGuard<'a> {
    state: &'a mut WizardState,
}

impl<'a> RequestGuard<'a> {
    pub fn begin(state: &'a mut WizardState) -> Self {
        state.begin_recipe_request();
        Self { state }
    }

    /// Record the outcome; `loading` is released when the guard drops
    pub fn finish(self, result: Result<String, FetchError>) {
        log_outcome(&result);
        self.state.finish_recipe_request(result_text(&result));
    }
}

impl Drop for RequestGuard<'_> {
    fn drop(&mut self) {
        self.state.set_loading(false);
    }
}

/// Run one recipe request on the calling thread
pub fn request_recipe(state: &mut WizardState, backend: &dyn KitchenBackend, query: &RecipeQuery) {
    let guard = RequestGuard::begin(state);
    let result = backend.fetch_recipe(query);
    guard.finish(result);
}

/// Mark a request as started before handing it to a worker
pub fn begin_request(state: &mut WizardState) {
    state.begin_recipe_request();
}

/// Apply the result a worker reported; always releases `loading`
pub fn complete_request(state: &mut WizardState, result: Result<String, FetchError>) {
    log_outcome(&result);
    state.finish_recipe_request(result_text(&result));
    state.set_loading(false);
}

/// Run the request on a worker thread and hand the result to `on_done`.
///
/// `on_done` is called exactly once. A panicking backend is reported as
/// `FetchError::Aborted` so the owner can still release `loading`.
pub fn spawn_request<F>(
    query: RecipeQuery,
    backend: Arc<dyn KitchenBackend>,
    on_done: F,
) -> thread::JoinHandle<()>
where
    F: FnOnce(Result<String, FetchError>) + Send + 'static,
{
    thread::spawn(move || {
        let result = panic::catch_unwind(AssertUnwindSafe(|| backend.fetch_recipe(&query)))
            .unwrap_or(Err(FetchError::Aborted));
        on_done(result);
    })
}

fn log_outcome(result: &Result<String, FetchError>) {
    match result {
        Ok(body) => tracing::info!("[recipe] Recipe received ({} bytes)", body.len()),
        Err(err) => tracing::error!("[recipe] Recipe request failed: {}", err),
    }
}
