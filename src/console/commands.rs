/// Console command types
///
/// Commands are what the user typed, parsed into the wizard action they
/// request.
use crate::catalog::{Continent, DietPreset};

/// Console commands
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Status,

    /// List the selectable continents
    Continents,

    /// Select a continent; `None` clears the selection
    SelectContinent(Option<Continent>),

    /// Filter the loaded cuisine list
    Search(String),

    /// Show the loaded cuisine list
    List,

    /// Choose a listed cuisine by zero-based position
    Pick(usize),

    /// Choose one of the quick cuisines
    Quick(String),

    AddIngredients(String),

    /// Remove an ingredient chip by zero-based position
    RemoveIngredient(usize),

    DietPreset(DietPreset),
    DietCustom(String),
    Back,
    Reset,
    Submit,

    /// Dismiss the result overlay
    Close,
    Quit,
}

impl Command {
    /// Parse one input line
    pub fn parse(line: &str) -> Result<Command, String> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "" => Err("Type 'help' for a list of commands".to_string()),
            "help" | "?" => Ok(Command::Help),
            "status" => Ok(Command::Status),
            "continents" => Ok(Command::Continents),
            "continent" => {
                if rest.is_empty() || rest.eq_ignore_ascii_case("none") {
                    Ok(Command::SelectContinent(None))
                } else {
                    Continent::from_label(rest)
                        .map(|c| Command::SelectContinent(Some(c)))
                        .ok_or_else(|| format!("Unknown continent: {}", rest))
                }
            }
            "search" => Ok(Command::Search(rest.to_string())),
            "list" => Ok(Command::List),
            "pick" => position(rest).map(Command::Pick),
            "quick" => Ok(Command::Quick(rest.to_string())),
            "add" => Ok(Command::AddIngredients(rest.to_string())),
            "remove" | "rm" => position(rest).map(Command::RemoveIngredient),
            "diet" => {
                if rest.is_empty() {
                    Ok(Command::DietPreset(DietPreset::None))
                } else {
                    DietPreset::from_label(rest)
                        .map(Command::DietPreset)
                        .ok_or_else(|| format!("Unknown diet preset: {}", rest))
                }
            }
            "custom" => Ok(Command::DietCustom(rest.to_string())),
            "back" => Ok(Command::Back),
            "reset" => Ok(Command::Reset),
            "submit" | "go" => Ok(Command::Submit),
            "close" => Ok(Command::Close),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(format!("Unknown command: {}", other)),
        }
    }

    /// Get a human-readable description of the command
    pub fn description(&self) -> String {
        match self {
            Command::Help => "Show help".to_string(),
            Command::Status => "Show current step".to_string(),
            Command::Continents => "List continents".to_string(),
            Command::SelectContinent(Some(c)) => format!("Select continent: {}", c),
            Command::SelectContinent(None) => "Clear continent".to_string(),
            Command::Search(q) => format!("Search cuisines: {}", q),
            Command::List => "List cuisines".to_string(),
            Command::Pick(i) => format!("Pick cuisine #{}", i + 1),
            Command::Quick(c) => format!("Quick cuisine: {}", c),
            Command::AddIngredients(raw) => format!("Add ingredients: {}", raw),
            Command::RemoveIngredient(i) => format!("Remove ingredient #{}", i + 1),
            Command::DietPreset(d) => format!("Diet preset: {}", d),
            Command::DietCustom(text) => format!("Custom diet: {}", text),
            Command::Back => "Change cuisine".to_string(),
            Command::Reset => "Reset entries".to_string(),
            Command::Submit => "Get recipe".to_string(),
            Command::Close => "Close recipe".to_string(),
            Command::Quit => "Quit".to_string(),
        }
    }
}

/// 1-based position typed by the user to a 0-based index
fn position(text: &str) -> Result<usize, String> {
    match text.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(format!("Expected a position starting at 1, got '{}'", text)),
    }
}

pub const HELP_TEXT: &str = "\
Commands:
  continents               list continents
  continent <name>|none    load cuisines for a continent
  search <text>            filter the cuisine list
  list                     show the cuisine list
  pick <n>                 choose the n-th listed cuisine
  quick <name>             choose Italian, Indian, Mexican or Chinese
  add <a, b, ...>          add ingredients
  remove <n>               remove the n-th ingredient
  diet <preset>            Vegetarian, Non-Vegetarian, Vegan or none
  custom <text>            custom dietary restriction (overrides preset)
  back                     change cuisine
  reset                    clear ingredients and diet
  submit                   get recipe
  close                    close the recipe
  status                   show the current step
  quit                     exit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse("help"), Ok(Command::Help));
        assert_eq!(Command::parse("  SUBMIT "), Ok(Command::Submit));
        assert_eq!(Command::parse("quit"), Ok(Command::Quit));
        assert!(Command::parse("").is_err());
        assert!(Command::parse("dance").is_err());
    }

    #[test]
    fn test_parse_continent() {
        assert_eq!(
            Command::parse("continent north america"),
            Ok(Command::SelectContinent(Some(Continent::NorthAmerica)))
        );
        assert_eq!(
            Command::parse("continent none"),
            Ok(Command::SelectContinent(None))
        );
        assert!(Command::parse("continent mars").is_err());
    }

    #[test]
    fn test_parse_positions_are_one_based() {
        assert_eq!(Command::parse("pick 1"), Ok(Command::Pick(0)));
        assert_eq!(Command::parse("remove 3"), Ok(Command::RemoveIngredient(2)));
        assert!(Command::parse("pick 0").is_err());
        assert!(Command::parse("rm two").is_err());
    }

    #[test]
    fn test_parse_free_text_arguments() {
        assert_eq!(
            Command::parse("add tomato, onion,  garlic"),
            Ok(Command::AddIngredients("tomato, onion,  garlic".to_string()))
        );
        assert_eq!(
            Command::parse("custom nut-free"),
            Ok(Command::DietCustom("nut-free".to_string()))
        );
        assert_eq!(Command::parse("custom"), Ok(Command::DietCustom(String::new())));
    }

    #[test]
    fn test_parse_diet() {
        assert_eq!(
            Command::parse("diet vegan"),
            Ok(Command::DietPreset(DietPreset::Vegan))
        );
        assert_eq!(Command::parse("diet"), Ok(Command::DietPreset(DietPreset::None)));
        assert!(Command::parse("diet paleo").is_err());
    }

    #[test]
    fn test_command_description() {
        assert_eq!(Command::Pick(0).description(), "Pick cuisine #1");
        assert_eq!(Command::Back.description(), "Change cuisine");
    }
}
