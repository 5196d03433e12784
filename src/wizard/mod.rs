/// Recipe wizard module
///
/// Two-step flow from cuisine choice to recipe request.
///
/// ## Architecture
///
/// ```text
/// WizardFlow
///   ├── WizardState (step, cuisine, chips, diet, loading, result, overlay)
///   ├── WizardStep (CuisineSelection, Ingredients)
///   └── Transitions (choose_cuisine, back, reset, submit)
/// ```
///
/// ## Usage
///
/// ```rust,ignore
/// use kitchen_wizard::wizard::{WizardFlow, SubmitOutcome};
///
/// let mut flow = WizardFlow::new();
/// flow.choose_cuisine("Italian");
/// flow.state_mut().ingredients_mut().commit("egg, flour");
///
/// match flow.submit(&backend) {
///     SubmitOutcome::Rejected { prompt } => println!("{prompt}"),
///     _ => println!("{}", flow.state().recipe_text()),
/// }
/// ```

pub mod steps;
pub mod state;
pub mod flow;

// Re-export commonly used types
pub use steps::WizardStep;
pub use state::WizardState;
pub use flow::{NavigationResult, SubmitOutcome, WizardFlow, EMPTY_INGREDIENTS_PROMPT};
