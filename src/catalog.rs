/// Fixed option sets offered by the wizard
///
/// Continents, diet presets and quick-pick cuisines never change at runtime.

/// Cuisines offered as one-click buttons on both steps
pub const QUICK_CUISINES: [&str; 4] = ["Italian", "Indian", "Mexican", "Chinese"];

/// Continent used to scope a cuisine listing request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Continent {
    Africa,
    Asia,
    Europe,
    NorthAmerica,
    SouthAmerica,
    Oceania,
    Antarctica,
}

impl Continent {
    pub const ALL: [Continent; 7] = [
        Continent::Africa,
        Continent::Asia,
        Continent::Europe,
        Continent::NorthAmerica,
        Continent::SouthAmerica,
        Continent::Oceania,
        Continent::Antarctica,
    ];

    /// Label shown to the user and sent as the `continent` query value
    pub fn label(&self) -> &'static str {
        match self {
            Continent::Africa => "Africa",
            Continent::Asia => "Asia",
            Continent::Europe => "Europe",
            Continent::NorthAmerica => "North America",
            Continent::SouthAmerica => "South America",
            Continent::Oceania => "Oceania",
            Continent::Antarctica => "Antarctica",
        }
    }

    /// Look up a continent by label, ignoring case and surrounding whitespace
    pub fn from_label(label: &str) -> Option<Continent> {
        let wanted = label.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
    }
}

impl std::fmt::Display for Continent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Preset dietary restriction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DietPreset {
    #[default]
    None,
    Vegetarian,
    NonVegetarian,
    Vegan,
}

impl DietPreset {
    pub const ALL: [DietPreset; 4] = [
        DietPreset::None,
        DietPreset::Vegetarian,
        DietPreset::NonVegetarian,
        DietPreset::Vegan,
    ];

    /// Wire value; `None` is the empty string
    pub fn value(&self) -> &'static str {
        match self {
            DietPreset::None => "",
            DietPreset::Vegetarian => "Vegetarian",
            DietPreset::NonVegetarian => "Non-Vegetarian",
            DietPreset::Vegan => "Vegan",
        }
    }

    /// Label for option lists
    pub fn label(&self) -> &'static str {
        match self {
            DietPreset::None => "None",
            other => other.value(),
        }
    }

    /// Look up a preset by wire value or label, ignoring case
    pub fn from_label(label: &str) -> Option<DietPreset> {
        let wanted = label.trim();
        Self::ALL.iter().copied().find(|d| {
            d.value().eq_ignore_ascii_case(wanted) || d.label().eq_ignore_ascii_case(wanted)
        })
    }
}

impl std::fmt::Display for DietPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
