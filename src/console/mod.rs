/// Line-oriented terminal front end
///
/// Maps typed commands onto session actions and renders the result as text.
/// Commands only act on the panel that is on screen, as the panels' controls
/// would: the continent list belongs to step 1, chips and diet to step 2.
/// While a recipe is open it covers both panels until it is closed.

pub mod commands;
pub mod render;

pub use commands::{Command, HELP_TEXT};

use crate::catalog::QUICK_CUISINES;
use crate::session::KitchenSession;
use crate::wizard::{NavigationResult, SubmitOutcome, WizardStep};

/// What the front end should do after a command
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// Print this text and keep going
    Output(String),
    Quit,
}

/// Execute one command against the session
pub fn execute(session: &mut KitchenSession, command: Command) -> Response {
    tracing::debug!("[console] {}", command.description());

    let step = session.step();
    let output = match command {
        Command::Help => HELP_TEXT.to_string(),
        Command::Status => render::screen(session),
        Command::Continents => render::continents(),
        Command::Quit => return Response::Quit,

        cmd if session.state().show_result_overlay() && acts_on_form(&cmd) => {
            format!("'{}': close the recipe first", cmd.description())
        }

        Command::Quick(name) => match quick_cuisine(&name) {
            Some(cuisine) => navigation(session.choose_cuisine(cuisine), session),
            None => format!("Quick cuisines are: {}", QUICK_CUISINES.join(", ")),
        },

        Command::Close => {
            if session.state().show_result_overlay() {
                session.dismiss_overlay();
                render::screen(session)
            } else {
                "No recipe is open".to_string()
            }
        }

        cmd @ (Command::SelectContinent(_)
        | Command::Search(_)
        | Command::List
        | Command::Pick(_))
            if step != WizardStep::CuisineSelection =>
        {
            format!("'{}' is available on step 1; type 'back'", cmd.description())
        }

        cmd @ (Command::AddIngredients(_)
        | Command::RemoveIngredient(_)
        | Command::DietPreset(_)
        | Command::DietCustom(_)
        | Command::Back
        | Command::Reset
        | Command::Submit)
            if step != WizardStep::Ingredients =>
        {
            format!("'{}' is available on step 2; pick a cuisine first", cmd.description())
        }

        Command::SelectContinent(continent) => {
            session.select_continent(continent);
            render::cuisine_panel(session)
        }
        Command::Search(query) => {
            session.set_cuisine_query(&query);
            render::cuisine_list(session)
        }
        Command::List => render::cuisine_list(session),
        Command::Pick(index) => navigation(session.pick_listed(index), session),

        Command::AddIngredients(raw) => {
            if session.add_ingredients(&raw) == 0 {
                "Nothing to add".to_string()
            } else {
                render::ingredients_panel(session)
            }
        }
        Command::RemoveIngredient(index) => match session.remove_ingredient(index) {
            Some(_) => render::ingredients_panel(session),
            None => format!("No ingredient at position {}", index + 1),
        },
        Command::DietPreset(preset) => {
            session.set_diet_preset(preset);
            render::ingredients_panel(session)
        }
        Command::DietCustom(text) => {
            session.set_diet_custom(&text);
            render::ingredients_panel(session)
        }
        Command::Back => navigation(session.back(), session),
        Command::Reset => {
            session.reset();
            render::ingredients_panel(session)
        }
        Command::Submit => match session.submit() {
            SubmitOutcome::Rejected { prompt } => prompt,
            SubmitOutcome::Busy => "A recipe is already being generated".to_string(),
            SubmitOutcome::Submitted => render::ingredients_panel(session),
        },
    };

    Response::Output(output)
}

/// Commands that touch the wizard panels, which the result overlay covers
fn acts_on_form(command: &Command) -> bool {
    !matches!(
        command,
        Command::Help | Command::Status | Command::Continents | Command::Close | Command::Quit
    )
}

fn quick_cuisine(name: &str) -> Option<&'static str> {
    let name = name.trim();
    QUICK_CUISINES
        .iter()
        .copied()
        .find(|c| c.eq_ignore_ascii_case(name))
}

fn navigation(result: NavigationResult, session: &KitchenSession) -> String {
    match result {
        NavigationResult::Success(_) => render::screen(session),
        NavigationResult::Blocked { reason } => reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{CuisineResponse, KitchenBackend};
    use crate::catalog::Continent;
    use crate::error::FetchError;
    use crate::recipe::RecipeQuery;
    use std::sync::Arc;
    use std::time::Duration;

    struct Canned;

    impl KitchenBackend for Canned {
        fn fetch_cuisines(&self, _continent: Continent) -> Result<CuisineResponse, FetchError> {
            Ok(CuisineResponse {
                body: "greek, french".to_string(),
                content_type: None,
            })
        }

        fn fetch_recipe(&self, _query: &RecipeQuery) -> Result<String, FetchError> {
            Ok(String::new())
        }
    }

    fn run(session: &mut KitchenSession, line: &str) -> String {
        match execute(session, Command::parse(line).unwrap()) {
            Response::Output(text) => text,
            Response::Quit => panic!("unexpected quit"),
        }
    }

    #[test]
    fn test_quick_cuisine_is_case_insensitive() {
        let mut session = KitchenSession::new(Arc::new(Canned));
        run(&mut session, "quick mexican");
        assert_eq!(session.state().selected_cuisine(), "Mexican");

        let text = run(&mut session, "quick sushi");
        assert!(text.starts_with("Quick cuisines are:"));
    }

    #[test]
    fn test_commands_are_scoped_to_their_step() {
        let mut session = KitchenSession::new(Arc::new(Canned));

        let text = run(&mut session, "add egg");
        assert!(text.contains("available on step 2"));
        assert!(session.state().ingredients().is_empty());

        run(&mut session, "quick italian");
        let text = run(&mut session, "continent asia");
        assert!(text.contains("available on step 1"));
        assert_eq!(session.loader().continent(), None);
    }

    #[test]
    fn test_full_console_flow() {
        let mut session = KitchenSession::new(Arc::new(Canned));

        run(&mut session, "continent europe");
        while session.is_busy() {
            assert!(session.wait(Duration::from_secs(5)));
        }
        let text = run(&mut session, "list");
        assert!(text.contains(" 1. Greek"));
        assert!(text.contains(" 2. French"));

        run(&mut session, "pick 2");
        assert_eq!(session.step(), WizardStep::Ingredients);
        assert_eq!(session.state().selected_cuisine(), "French");

        let text = run(&mut session, "submit");
        assert_eq!(text, crate::wizard::EMPTY_INGREDIENTS_PROMPT);

        run(&mut session, "add butter, leek");
        run(&mut session, "submit");
        while session.is_busy() {
            assert!(session.wait(Duration::from_secs(5)));
        }
        assert_eq!(session.state().recipe_text(), crate::recipe::EMPTY_RECIPE_TEXT);

        let text = run(&mut session, "close");
        assert!(!session.state().show_result_overlay());
        assert!(!text.contains("Your Generated Recipe"));
    }

    #[test]
    fn test_open_recipe_must_be_closed_before_editing() {
        let mut session = KitchenSession::new(Arc::new(Canned));
        run(&mut session, "quick italian");
        run(&mut session, "add egg");
        run(&mut session, "submit");
        while session.is_busy() {
            assert!(session.wait(Duration::from_secs(5)));
        }
        assert!(session.state().show_result_overlay());

        let text = run(&mut session, "submit");
        assert!(text.contains("close the recipe first"), "{}", text);
        assert!(!session.state().is_loading());
        assert_eq!(session.state().recipe_text(), crate::recipe::EMPTY_RECIPE_TEXT);

        let text = run(&mut session, "add flour");
        assert!(text.contains("close the recipe first"));
        assert_eq!(session.state().ingredients().len(), 1);

        let text = run(&mut session, "quick mexican");
        assert!(text.contains("close the recipe first"));
        assert_eq!(session.state().selected_cuisine(), "Italian");

        run(&mut session, "close");
        assert_eq!(run(&mut session, "submit"), render::ingredients_panel(&session));
        assert!(session.state().is_loading());
        assert!(!render::screen(&session).contains("Your Generated Recipe"));
    }

    #[test]
    fn test_pick_waits_for_listing() {
        let mut session = KitchenSession::new(Arc::new(Canned));
        run(&mut session, "continent europe");

        let text = run(&mut session, "pick 1");
        assert_eq!(text, "Cuisines are still loading");
        assert_eq!(session.step(), WizardStep::CuisineSelection);

        while session.is_busy() {
            assert!(session.wait(Duration::from_secs(5)));
        }
        run(&mut session, "pick 1");
        assert_eq!(session.state().selected_cuisine(), "Greek");
    }

    #[test]
    fn test_quit() {
        let mut session = KitchenSession::new(Arc::new(Canned));
        assert_eq!(execute(&mut session, Command::Quit), Response::Quit);
    }
}
