//! Per-facet selections made by the user.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{facet::SelectMode, record::FacetOriginalValue};


/// Values chosen for one facet. Unique; keeps insertion order for display.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionSet {
    values: Vec<FacetOriginalValue>,
}

impl SelectionSet {
    pub fn contains(&self, value: &FacetOriginalValue) -> bool {
        self.values.contains(value)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FacetOriginalValue> {
        self.values.iter()
    }

    /// Returns false if the value was already selected.
    pub fn insert(&mut self, value: FacetOriginalValue) -> bool {
        if self.contains(&value) {
            return false;
        }
        self.values.push(value);
        true
    }

    pub fn remove(&mut self, value: &FacetOriginalValue) -> bool {
        let before = self.values.len();
        self.values.retain(|v| v != value);
        self.values.len() != before
    }

    pub fn toggle(&mut self, value: FacetOriginalValue) {
        if !self.remove(&value) {
            self.values.push(value);
        }
    }
}

impl FromIterator<FacetOriginalValue> for SelectionSet {
    fn from_iter<T: IntoIterator<Item = FacetOriginalValue>>(iter: T) -> Self {
        let mut set = SelectionSet::default();
        for value in iter {
            set.insert(value);
        }
        set
    }
}


/// Current selection of every facet of a view, keyed by field.
///
/// Facets without an entry are unrestricted; an emptied selection is
/// dropped rather than kept as an empty set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState<F: Ord> {
    selections: BTreeMap<F, SelectionSet>,
}

impl<F: Ord> Default for FilterState<F> {
    fn default() -> Self {
        Self { selections: BTreeMap::new() }
    }
}

impl<F: Ord + Clone> FilterState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the value if absent, removes it if present.
    pub fn toggle(&mut self, facet: F, value: FacetOriginalValue) {
        let entry = self.selections.entry(facet.clone()).or_default();
        entry.toggle(value);
        if entry.is_empty() {
            self.selections.remove(&facet);
        }
    }

    /// Single-select toggle: the value replaces the current selection,
    /// or clears it when it is the one already selected.
    pub fn toggle_single(&mut self, facet: F, value: FacetOriginalValue) {
        let already_selected = self.selections.get(&facet).is_some_and(|s| s.len() == 1 && s.contains(&value));
        if already_selected {
            self.selections.remove(&facet);
        } else {
            self.selections.insert(facet, SelectionSet::from_iter([value]));
        }
    }

    pub fn toggle_with_mode(&mut self, facet: F, value: FacetOriginalValue, mode: SelectMode) {
        match mode {
            SelectMode::Multi => self.toggle(facet, value),
            SelectMode::Single => self.toggle_single(facet, value),
        }
    }

    pub fn clear(&mut self, facet: &F) {
        self.selections.remove(facet);
    }

    pub fn clear_all(&mut self) {
        self.selections.clear();
    }

    /// Drops selected values rejected by `keep`; facets left empty are removed.
    pub fn retain_values(&mut self, mut keep: impl FnMut(&F, &FacetOriginalValue) -> bool) {
        for (facet, selection) in self.selections.iter_mut() {
            selection.values.retain(|v| keep(facet, v));
        }
        self.selections.retain(|_, selection| !selection.is_empty());
    }

    pub fn selection(&self, facet: &F) -> Option<&SelectionSet> {
        self.selections.get(facet)
    }

    pub fn selections(&self) -> &BTreeMap<F, SelectionSet> {
        &self.selections
    }

    pub fn is_unrestricted(&self) -> bool {
        self.selections.values().all(SelectionSet::is_empty)
    }
}
