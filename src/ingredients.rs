/// Ordered ingredient chips
///
/// Ingredients are kept exactly as entered, in entry order. Duplicates are
/// allowed; the store never deduplicates.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientChips {
    items: Vec<String>,
}

impl IngredientChips {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split `raw` on commas and append every non-empty trimmed piece.
    ///
    /// Returns the number of chips added; zero means nothing changed.
    pub fn commit(&mut self, raw: &str) -> usize {
        let before = self.items.len();
        self.items.extend(
            raw.split(',')
                .map(str::trim)
                .filter(|piece| !piece.is_empty())
                .map(str::to_string),
        );
        self.items.len() - before
    }

    /// Remove the chip at `index`; out-of-range indices are ignored
    pub fn remove_at(&mut self, index: usize) -> Option<String> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Chips joined with "," for the recipe request
    pub fn joined(&self) -> String {
        self.items.join(",")
    }
}
