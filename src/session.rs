/// Wizard session coordinator
///
/// Owns all wizard and listing state on a single thread. Network calls run on
/// worker threads which report back through a completion channel; the owner
/// drains that channel (`poll`, `wait`, or a `select!` on `completions()`)
/// and applies results itself, so no state is ever shared between threads.
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender};

use crate::backend::{CuisineResponse, KitchenBackend};
use crate::catalog::{Continent, DietPreset};
use crate::cuisine_loader::{self, CuisineLoader, Generation};
use crate::error::FetchError;
use crate::recipe;
use crate::wizard::{NavigationResult, SubmitOutcome, WizardFlow, WizardState, WizardStep};

/// Result reported by a network worker
#[derive(Debug)]
pub enum Completion {
    Cuisines {
        generation: Generation,
        result: Result<CuisineResponse, FetchError>,
    },
    Recipe {
        result: Result<String, FetchError>,
    },
}

/// One user's wizard session
pub struct KitchenSession {
    flow: WizardFlow,
    loader: CuisineLoader,
    backend: Arc<dyn KitchenBackend>,
    completion_tx: Sender<Completion>,
    completion_rx: Receiver<Completion>,
}

impl KitchenSession {
    pub fn new(backend: Arc<dyn KitchenBackend>) -> Self {
        let (completion_tx, completion_rx) = unbounded();
        Self {
            flow: WizardFlow::new(),
            loader: CuisineLoader::new(),
            backend,
            completion_tx,
            completion_rx,
        }
    }

    pub fn state(&self) -> &WizardState {
        self.flow.state()
    }

    pub fn step(&self) -> WizardStep {
        self.flow.current_step()
    }

    pub fn loader(&self) -> &CuisineLoader {
        &self.loader
    }

    /// Channel the owner can `select!` on alongside user input
    pub fn completions(&self) -> &Receiver<Completion> {
        &self.completion_rx
    }

    /// Pick a continent, or clear the selection with `None`
    pub fn select_continent(&mut self, continent: Option<Continent>) {
        if let Some(fetch) = self.loader.select(continent) {
            let tx = self.completion_tx.clone();
            cuisine_loader::spawn_fetch(fetch, Arc::clone(&self.backend), move |generation, result| {
                let _ = tx.send(Completion::Cuisines { generation, result });
            });
        }
    }

    pub fn set_cuisine_query(&mut self, query: &str) {
        self.loader.set_query(query);
    }

    /// Choose the cuisine at `index` of the visible (filtered) list
    pub fn pick_listed(&mut self, index: usize) -> NavigationResult {
        if self.loader.is_loading() {
            return NavigationResult::Blocked {
                reason: "Cuisines are still loading".to_string(),
            };
        }

        let chosen = self.loader.visible().get(index).map(|c| c.to_string());
        match chosen {
            Some(cuisine) => self.flow.choose_cuisine(&cuisine),
            None => NavigationResult::Blocked {
                reason: format!("No cuisine at position {}", index + 1),
            },
        }
    }

    /// Choose a cuisine directly, as the quick buttons do
    pub fn choose_cuisine(&mut self, cuisine: &str) -> NavigationResult {
        self.flow.choose_cuisine(cuisine)
    }

    /// Return to cuisine selection with the search seeded from the current
    /// cuisine
    pub fn back(&mut self) -> NavigationResult {
        let result = self.flow.back();
        if result == NavigationResult::Success(WizardStep::CuisineSelection) {
            let cuisine = self.state().selected_cuisine().to_string();
            self.loader.set_query(&cuisine);
        }
        result
    }

    pub fn reset(&mut self) {
        self.flow.reset();
    }

    pub fn add_ingredients(&mut self, raw: &str) -> usize {
        self.flow.state_mut().ingredients_mut().commit(raw)
    }

    pub fn remove_ingredient(&mut self, index: usize) -> Option<String> {
        self.flow.state_mut().ingredients_mut().remove_at(index)
    }

    pub fn set_diet_preset(&mut self, preset: DietPreset) {
        self.flow.state_mut().set_diet_preset(preset);
    }

    pub fn set_diet_custom(&mut self, text: &str) {
        self.flow.state_mut().set_diet_custom(text);
    }

    pub fn dismiss_overlay(&mut self) {
        self.flow.state_mut().dismiss_overlay();
    }

    /// Submit the form.
    ///
    /// Refused with `Busy` while a request is in flight, like the disabled
    /// submit button. The request itself runs on a worker; its result
    /// arrives as a [`Completion::Recipe`].
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.state().is_loading() {
            return SubmitOutcome::Busy;
        }

        let query = match self.flow.submission() {
            Ok(query) => query,
            Err(outcome) => return outcome,
        };

        tracing::info!("[session] Requesting recipe for {}", query.ingredients);
        recipe::begin_request(self.flow.state_mut());
        let tx = self.completion_tx.clone();
        recipe::spawn_request(query, Arc::clone(&self.backend), move |result| {
            let _ = tx.send(Completion::Recipe { result });
        });

        SubmitOutcome::Submitted
    }

    /// Apply one completion on the owning thread
    pub fn handle(&mut self, completion: Completion) {
        match completion {
            Completion::Cuisines { generation, result } => {
                self.loader.apply(generation, result);
            }
            Completion::Recipe { result } => {
                recipe::complete_request(self.flow.state_mut(), result);
            }
        }
    }

    /// Apply every completion that has already arrived
    pub fn poll(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(completion) = self.completion_rx.try_recv() {
            self.handle(completion);
            handled += 1;
        }
        handled
    }

    /// Block until one completion arrives and apply it.
    ///
    /// Returns false on timeout.
    pub fn wait(&mut self, timeout: Duration) -> bool {
        match self.completion_rx.recv_timeout(timeout) {
            Ok(completion) => {
                self.handle(completion);
                true
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => false,
        }
    }

    /// Whether any network request is still outstanding
    pub fn is_busy(&self) -> bool {
        self.loader.is_loading() || self.state().is_loading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::RecipeQuery;

    struct EchoBackend;

    impl KitchenBackend for EchoBackend {
        fn fetch_cuisines(&self, continent: Continent) -> Result<CuisineResponse, FetchError> {
            Ok(CuisineResponse {
                body: format!("1. {} one\n2. {} two", continent, continent),
                content_type: Some("text/plain".to_string()),
            })
        }

        fn fetch_recipe(&self, query: &RecipeQuery) -> Result<String, FetchError> {
            Ok(format!("{} with {}", query.cuisine, query.ingredients))
        }
    }

    fn session() -> KitchenSession {
        KitchenSession::new(Arc::new(EchoBackend))
    }

    fn settle(session: &mut KitchenSession) {
        while session.is_busy() {
            assert!(session.wait(Duration::from_secs(5)), "completion timed out");
        }
    }

    #[test]
    fn test_continent_listing_then_pick() {
        let mut session = session();
        session.select_continent(Some(Continent::Europe));
        settle(&mut session);

        assert_eq!(session.loader().cuisines(), ["Europe one", "Europe two"]);

        let result = session.pick_listed(1);
        assert_eq!(result, NavigationResult::Success(WizardStep::Ingredients));
        assert_eq!(session.state().selected_cuisine(), "Europe two");
    }

    #[test]
    fn test_pick_listed_out_of_range() {
        let mut session = session();
        let result = session.pick_listed(0);

        assert!(matches!(result, NavigationResult::Blocked { .. }));
        assert_eq!(session.step(), WizardStep::CuisineSelection);
    }

    #[test]
    fn test_pick_uses_filtered_list() {
        let mut session = session();
        session.select_continent(Some(Continent::Asia));
        settle(&mut session);

        session.set_cuisine_query("TWO");
        session.pick_listed(0);
        assert_eq!(session.state().selected_cuisine(), "Asia two");
    }

    #[test]
    fn test_pick_refused_while_loading() {
        let mut session = session();
        session.select_continent(Some(Continent::Africa));
        settle(&mut session);

        // The new continent's fetch is still outstanding
        session.select_continent(Some(Continent::Asia));
        let result = session.pick_listed(0);
        assert_eq!(
            result,
            NavigationResult::Blocked {
                reason: "Cuisines are still loading".to_string()
            }
        );
        assert_eq!(session.step(), WizardStep::CuisineSelection);
        assert_eq!(session.state().selected_cuisine(), "");

        settle(&mut session);
        session.pick_listed(0);
        assert_eq!(session.state().selected_cuisine(), "Asia one");
    }

    #[test]
    fn test_back_seeds_search_with_current_cuisine() {
        let mut session = session();
        session.select_continent(Some(Continent::Europe));
        settle(&mut session);
        session.pick_listed(1);

        let result = session.back();

        assert_eq!(result, NavigationResult::Success(WizardStep::CuisineSelection));
        assert_eq!(session.loader().query(), "Europe two");
        assert_eq!(session.loader().visible(), ["Europe two"]);
    }

    #[test]
    fn test_back_on_first_step_keeps_query() {
        let mut session = session();
        session.set_cuisine_query("thai");

        let result = session.back();

        assert!(matches!(result, NavigationResult::Blocked { .. }));
        assert_eq!(session.loader().query(), "thai");
    }

    #[test]
    fn test_resubmit_hides_previous_result_until_done() {
        let mut session = session();
        session.choose_cuisine("Italian");
        session.add_ingredients("egg");
        session.submit();
        settle(&mut session);
        assert!(session.state().show_result_overlay());

        assert_eq!(session.submit(), SubmitOutcome::Submitted);
        assert!(session.state().is_loading());
        assert!(!session.state().show_result_overlay());

        settle(&mut session);
        assert!(session.state().show_result_overlay());
        assert_eq!(session.state().recipe_text(), "Italian with egg");
    }

    #[test]
    fn test_submit_round_trip() {
        let mut session = session();
        session.choose_cuisine("Italian");
        session.add_ingredients("egg, flour");

        assert_eq!(session.submit(), SubmitOutcome::Submitted);
        assert!(session.state().is_loading());
        assert_eq!(session.submit(), SubmitOutcome::Busy);

        settle(&mut session);

        assert!(!session.state().is_loading());
        assert_eq!(session.state().recipe_text(), "Italian with egg,flour");
        assert!(session.state().show_result_overlay());

        session.dismiss_overlay();
        assert!(!session.state().show_result_overlay());
    }

    #[test]
    fn test_submit_without_ingredients() {
        let mut session = session();
        session.choose_cuisine("Indian");

        let outcome = session.submit();
        assert!(matches!(outcome, SubmitOutcome::Rejected { .. }));
        assert!(!session.is_busy());
        assert_eq!(session.poll(), 0);
    }
}
