/// Wizard step definitions
///
/// The wizard has two panels: cuisine selection, then ingredient and diet
/// entry with submission.

/// Wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WizardStep {
    /// Pick a cuisine from the quick buttons or the continent listing
    #[default]
    CuisineSelection,

    /// Enter ingredients and dietary restrictions, then request a recipe
    Ingredients,
}

impl WizardStep {
    /// Get step title
    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::CuisineSelection => "Pick a cuisine",
            WizardStep::Ingredients => "Ingredients and Dietary Restrictions",
        }
    }

    /// Get step description
    pub fn description(&self) -> &'static str {
        match self {
            WizardStep::CuisineSelection => {
                "Either pick one of the quick buttons or use the continent selector below."
            }
            WizardStep::Ingredients => {
                "Choose from the list or type your own. Custom text overrides preset."
            }
        }
    }

    /// Get step number (1-indexed)
    pub fn number(&self) -> usize {
        match self {
            WizardStep::CuisineSelection => 1,
            WizardStep::Ingredients => 2,
        }
    }

    /// Get previous step
    pub fn previous(&self) -> Option<WizardStep> {
        match self {
            WizardStep::CuisineSelection => None,
            WizardStep::Ingredients => Some(WizardStep::CuisineSelection),
        }
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}
