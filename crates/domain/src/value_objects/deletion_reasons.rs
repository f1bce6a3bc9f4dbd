//! Deletion reasons: the fixed catalog and the user's selection from it.

use crate::error::DomainError;

/// Reasons offered on the deletion form, referenced by index.
const REASONS: [&str; 5] = [
    "I have privacy concerns.",
    "I no longer find this useful.",
    "I'm receiving irrelevant email contents.",
    "I'm getting too many emails.",
    "Others",
];

/// Ordered, immutable catalog of deletion reasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReasonCatalog;

impl ReasonCatalog {
    pub const fn len(&self) -> usize {
        REASONS.len()
    }

    pub const fn is_empty(&self) -> bool {
        REASONS.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'static str> {
        REASONS.get(index).copied()
    }

    /// `(index, text)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &'static str)> {
        REASONS.iter().copied().enumerate()
    }

    /// Map selected indices to their text, keeping selection order.
    pub fn resolve(&self, selected: &SelectedReasons) -> Vec<String> {
        selected
            .iter()
            .filter_map(|index| self.get(index))
            .map(str::to_string)
            .collect()
    }
}

/// Insertion-ordered set of selected catalog indices.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectedReasons(Vec<usize>);

impl SelectedReasons {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove `index` if selected, otherwise append it.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownReason` if `index` is outside the catalog;
    /// the selection is left unchanged.
    pub fn toggle(&mut self, index: usize) -> Result<(), DomainError> {
        let catalog = ReasonCatalog;
        if index >= catalog.len() {
            return Err(DomainError::unknown_reason(index, catalog.len()));
        }
        match self.0.iter().position(|&i| i == index) {
            Some(pos) => {
                self.0.remove(pos);
            }
            None => self.0.push(index),
        }
        Ok(())
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order() {
        let catalog = ReasonCatalog;
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.get(0), Some("I have privacy concerns."));
        assert_eq!(catalog.get(4), Some("Others"));
        assert_eq!(catalog.get(5), None);
        let indices: Vec<_> = catalog.iter().map(|(i, _)| i).collect();
        assert_eq!(indices, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_toggle_keeps_insertion_order() {
        let mut selected = SelectedReasons::new();
        selected.toggle(3).unwrap();
        selected.toggle(0).unwrap();
        selected.toggle(2).unwrap();
        assert_eq!(selected.as_slice(), [3, 0, 2]);

        selected.toggle(0).unwrap();
        assert_eq!(selected.as_slice(), [3, 2]);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        for index in 0..ReasonCatalog.len() {
            let mut selected = SelectedReasons::new();
            selected.toggle(1).unwrap();
            let before = selected.clone();
            selected.toggle(index).unwrap();
            selected.toggle(index).unwrap();
            assert_eq!(selected, before);
        }
    }

    #[test]
    fn test_toggle_rejects_unknown_index() {
        let mut selected = SelectedReasons::new();
        selected.toggle(1).unwrap();
        let err = selected.toggle(5).unwrap_err();
        assert_eq!(err, DomainError::unknown_reason(5, 5));
        assert_eq!(selected.as_slice(), [1]);
    }

    #[test]
    fn test_resolve_follows_selection_order() {
        let mut selected = SelectedReasons::new();
        selected.toggle(4).unwrap();
        selected.toggle(1).unwrap();
        assert_eq!(
            ReasonCatalog.resolve(&selected),
            vec![
                "Others".to_string(),
                "I no longer find this useful.".to_string()
            ]
        );
    }
}
