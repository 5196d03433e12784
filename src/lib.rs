//! Kitchen Wizard: pick a cuisine, list your ingredients and a dietary
//! restriction, and get a generated recipe from a remote service.
//!
//! ```text
//! input ─> KitchenSession ─┬─> WizardFlow (step, cuisine, chips, diet, result)
//!                          ├─> CuisineLoader ──worker──> backend ─> parser
//!                          └─> recipe client ──worker──> backend
//! ```
//!
//! All state lives on the thread that owns the [`session::KitchenSession`];
//! network workers only report completions back over a channel.

pub mod backend;
pub mod catalog;
pub mod config;
pub mod console;
pub mod cuisine_loader;
pub mod error;
pub mod ingredients;
pub mod parser;
pub mod recipe;
pub mod session;
pub mod wizard;

pub use backend::{CuisineResponse, HttpBackend, KitchenBackend};
pub use catalog::{Continent, DietPreset, QUICK_CUISINES};
pub use config::Config;
pub use cuisine_loader::{CuisineLoader, Generation};
pub use error::{ConfigError, FetchError};
pub use ingredients::IngredientChips;
pub use recipe::RecipeQuery;
pub use session::{Completion, KitchenSession};
pub use wizard::{NavigationResult, SubmitOutcome, WizardFlow, WizardState, WizardStep};
