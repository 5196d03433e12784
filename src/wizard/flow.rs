/// Wizard flow management
///
/// Step transitions and the submit guard.

use super::state::WizardState;
use super::steps::WizardStep;
use crate::backend::KitchenBackend;
use crate::recipe::{self, RecipeQuery};

/// Prompt shown when submitting without ingredients
pub const EMPTY_INGREDIENTS_PROMPT: &str = "Please add at least one ingredient.";

/// Navigation result
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationResult {
    /// Navigation succeeded, now on new step
    Success(WizardStep),

    /// Navigation blocked (at boundary or validation failed)
    Blocked { reason: String },
}

/// Outcome of a submit attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Guard failed; nothing changed and no request was made
    Rejected { prompt: String },

    /// A request is already in flight
    Busy,

    /// The request was issued
    Submitted,
}

/// Wizard flow manager
#[derive(Debug, Default)]
pub struct WizardFlow {
    state: WizardState,
}

impl WizardFlow {
    /// Create a new wizard flow
    pub fn new() -> Self {
        Self::default()
    }

    /// Get current step
    pub fn current_step(&self) -> WizardStep {
        self.state.step()
    }

    /// Get wizard state
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// Get mutable wizard state
    pub fn state_mut(&mut self) -> &mut WizardState {
        &mut self.state
    }

    /// Choose a cuisine and move to ingredient entry.
    ///
    /// Works from either step, the quick buttons are visible on both.
    pub fn choose_cuisine(&mut self, cuisine: &str) -> NavigationResult {
        if cuisine.trim().is_empty() {
            return NavigationResult::Blocked {
                reason: "No cuisine chosen".to_string(),
            };
        }

        tracing::info!("[wizard] Cuisine chosen: {}", cuisine);
        self.state.set_selected_cuisine(cuisine);
        self.state.set_step(WizardStep::Ingredients);
        NavigationResult::Success(WizardStep::Ingredients)
    }

    /// Navigate to previous step; the chosen cuisine is kept
    pub fn back(&mut self) -> NavigationResult {
        match self.current_step().previous() {
            Some(prev_step) => {
                self.state.set_step(prev_step);
                NavigationResult::Success(prev_step)
            }
            None => NavigationResult::Blocked {
                reason: "Already at first step".to_string(),
            },
        }
    }

    /// Clear ingredients and diet entries
    pub fn reset(&mut self) {
        self.state.clear_entries();
    }

    /// Check if can go back
    pub fn can_go_back(&self) -> bool {
        self.current_step().previous().is_some()
    }

    /// Apply the submit guard and snapshot the request
    pub fn submission(&self) -> Result<RecipeQuery, SubmitOutcome> {
        if self.state.ingredients().is_empty() {
            tracing::debug!("[wizard] Submit rejected: no ingredients");
            return Err(SubmitOutcome::Rejected {
                prompt: EMPTY_INGREDIENTS_PROMPT.to_string(),
            });
        }
        Ok(RecipeQuery::from_state(&self.state))
    }

    /// Submit and wait for the recipe on the calling thread
    pub fn submit(&mut self, backend: &dyn KitchenBackend) -> SubmitOutcome {
        match self.submission() {
            Ok(query) => {
                recipe::request_recipe(&mut self.state, backend, &query);
                SubmitOutcome::Submitted
            }
            Err(outcome) => outcome,
        }
    }
}
