/// Text rendering of the wizard panels and the result overlay
use std::fmt::Write as _;

use crate::catalog::{Continent, QUICK_CUISINES};
use crate::session::KitchenSession;
use crate::wizard::WizardStep;

/// Everything currently on screen
pub fn screen(session: &KitchenSession) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Quick try cuisines: {}", QUICK_CUISINES.join(" | "));
    out.push('\n');

    match session.step() {
        WizardStep::CuisineSelection => out.push_str(&cuisine_panel(session)),
        WizardStep::Ingredients => out.push_str(&ingredients_panel(session)),
    }

    if session.state().show_result_overlay() {
        out.push('\n');
        out.push_str(&overlay(session.state().recipe_text()));
    }
    out
}

fn heading(step: WizardStep) -> String {
    format!("Step {} of 2: {}\n{}\n", step.number(), step.title(), step.description())
}

/// Step 1: continent selector and cuisine list
pub fn cuisine_panel(session: &KitchenSession) -> String {
    let loader = session.loader();
    let mut out = heading(WizardStep::CuisineSelection);

    let continent = loader
        .continent()
        .map(|c| c.label())
        .unwrap_or("-- Select a continent --");
    let _ = writeln!(out, "Continent: {}", continent);
    if !loader.query().is_empty() {
        let _ = writeln!(out, "Search: {}", loader.query());
    }
    out.push_str(&cuisine_list(session));
    out
}

/// Loaded cuisines, filtered and numbered
pub fn cuisine_list(session: &KitchenSession) -> String {
    let loader = session.loader();
    let mut out = String::new();

    if let Some(status) = loader.status_text() {
        let _ = writeln!(out, "  {}", status);
    }
    if !loader.is_loading() {
        for (i, cuisine) in loader.visible().iter().enumerate() {
            let _ = writeln!(out, "  {:>2}. {}", i + 1, cuisine);
        }
    }
    out
}

/// Step 2: chips, diet fields and the submit button
pub fn ingredients_panel(session: &KitchenSession) -> String {
    let state = session.state();
    let mut out = heading(WizardStep::Ingredients);

    let cuisine = match state.selected_cuisine() {
        "" => "Not selected",
        other => other,
    };
    let _ = writeln!(out, "Selected cuisine: {}", cuisine);

    if state.ingredients().is_empty() {
        out.push_str("Ingredients: No ingredients added yet.\n");
    } else {
        let chips: Vec<String> = state
            .ingredients()
            .iter()
            .enumerate()
            .map(|(i, ing)| format!("[{} {} x]", i + 1, ing))
            .collect();
        let _ = writeln!(out, "Ingredients: {}", chips.join(" "));
    }

    let _ = writeln!(
        out,
        "Dietary restrictions: preset {}, custom '{}'",
        state.diet_preset(),
        state.diet_custom()
    );

    let button = if state.is_loading() {
        "Generating…"
    } else {
        "Get Recipe"
    };
    let _ = writeln!(out, "[Reset]  [{}]", button);
    out
}

/// Full-view result overlay
pub fn overlay(recipe_text: &str) -> String {
    let mut out = String::from("==== Your Generated Recipe ====\n");
    out.push_str(recipe_text);
    if !recipe_text.ends_with('\n') {
        out.push('\n');
    }
    out.push_str("==== type 'close' to dismiss ====\n");
    out
}

/// Continent option list
pub fn continents() -> String {
    let mut out = String::new();
    for continent in Continent::ALL {
        let _ = writeln!(out, "  {}", continent);
    }
    out
}
