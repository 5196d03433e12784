/// Wizard state management
///
/// Everything the two wizard panels and the result overlay show. State is
/// created once per session and never persisted.

use super::steps::WizardStep;
use crate::catalog::DietPreset;
use crate::ingredients::IngredientChips;

/// Wizard state
#[derive(Debug, Clone, Default)]
pub struct WizardState {
    /// Current step
    step: WizardStep,

    /// Chosen cuisine label, empty until one is picked
    selected_cuisine: String,

    /// Ingredient chips in entry order
    ingredients: IngredientChips,

    diet_preset: DietPreset,

    /// Free text restriction; overrides the preset when non-blank
    diet_custom: String,

    /// A recipe request is in flight
    loading: bool,

    /// Last recipe or error text
    recipe_text: String,

    /// Whether the result overlay is shown
    show_result_overlay: bool,
}

impl WizardState {
    /// Create a new wizard state (fresh session)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub(crate) fn set_step(&mut self, step: WizardStep) {
        self.step = step;
    }

    pub fn selected_cuisine(&self) -> &str {
        &self.selected_cuisine
    }

    pub(crate) fn set_selected_cuisine(&mut self, cuisine: &str) {
        self.selected_cuisine = cuisine.to_string();
    }

    pub fn ingredients(&self) -> &IngredientChips {
        &self.ingredients
    }

    pub fn ingredients_mut(&mut self) -> &mut IngredientChips {
        &mut self.ingredients
    }

    pub fn diet_preset(&self) -> DietPreset {
        self.diet_preset
    }

    pub fn set_diet_preset(&mut self, preset: DietPreset) {
        self.diet_preset = preset;
    }

    pub fn diet_custom(&self) -> &str {
        &self.diet_custom
    }

    pub fn set_diet_custom(&mut self, text: &str) {
        self.diet_custom = text.to_string();
    }

    /// Restriction sent with the recipe request.
    ///
    /// Custom text wins when it is non-blank (it is sent trimmed), otherwise
    /// the preset value, which is empty for `DietPreset::None`.
    pub fn effective_diet(&self) -> String {
        let custom = self.diet_custom.trim();
        if custom.is_empty() {
            self.diet_preset.value().to_string()
        } else {
            custom.to_string()
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub(crate) fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn recipe_text(&self) -> &str {
        &self.recipe_text
    }

    pub fn show_result_overlay(&self) -> bool {
        self.show_result_overlay
    }

    /// User closed the overlay
    pub fn dismiss_overlay(&mut self) {
        self.show_result_overlay = false;
    }

    /// Mark a recipe request as started; any previous result is closed
    pub(crate) fn begin_recipe_request(&mut self) {
        self.loading = true;
        self.recipe_text.clear();
        self.show_result_overlay = false;
    }

    /// Store the outcome of a recipe request and open the overlay
    pub(crate) fn finish_recipe_request(&mut self, text: String) {
        self.recipe_text = text;
        self.show_result_overlay = true;
    }

    /// Clear ingredients and diet fields; step and cuisine stay
    pub(crate) fn clear_entries(&mut self) {
        self.ingredients.clear();
        self.diet_preset = DietPreset::None;
        self.diet_custom.clear();
    }
}
