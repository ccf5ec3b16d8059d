//! Facet definitions and facet option extraction.

use std::{
    cmp::Ordering,
    collections::{BTreeMap, HashMap, HashSet},
};

use serde::{Deserialize, Serialize};

use crate::record::{FacetOriginalValue, Record};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectMode {
    #[default]
    Multi,
    Single,
}

/// Order in which a facet lists its options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacetOrder {
    /// Order of first occurrence in the collection.
    #[default]
    FirstSeen,
    /// Most matching records first, ties broken by label.
    CountDesc,
    /// Alphabetical by display label. Integers without a label override
    /// come first, by value, so 9 sorts before 10.
    Label,
}

/// One field a view exposes as a filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetSpec<F> {
    pub field: F,
    pub display_name: String,
    #[serde(default)]
    pub multi_valued: bool,
    #[serde(default)]
    pub select_mode: SelectMode,
    #[serde(default)]
    pub order: FacetOrder,
    /// Display labels keyed by the raw value's string form.
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
}

impl<F> FacetSpec<F> {
    pub fn new(field: F, display_name: impl Into<String>) -> Self {
        Self {
            field,
            display_name: display_name.into(),
            multi_valued: false,
            select_mode: SelectMode::Multi,
            order: FacetOrder::FirstSeen,
            labels: BTreeMap::new(),
        }
    }

    pub fn multi_valued(mut self) -> Self {
        self.multi_valued = true;
        self
    }

    pub fn single_select(mut self) -> Self {
        self.select_mode = SelectMode::Single;
        self
    }

    pub fn ordered_by(mut self, order: FacetOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_label(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.labels.insert(value.into(), label.into());
        self
    }

    pub fn label_for(&self, value: &FacetOriginalValue) -> String {
        let raw = value.to_string();
        self.labels.get(&raw).cloned().unwrap_or(raw)
    }
}


/// A selectable value of a facet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetOption {
    pub value: FacetOriginalValue,
    pub label: String,
    /// Records carrying this value.
    pub count: usize,
}

impl FacetOption {
    fn unlabelled_int(&self) -> Option<i64> {
        match self.value {
            FacetOriginalValue::Int(n) if self.label == n.to_string() => Some(n),
            _ => None,
        }
    }
}


/// Distinct values of `field` across `records`, in order of first occurrence.
pub fn extract_values<'a, R: Record + 'a>(
    records: impl IntoIterator<Item = &'a R>,
    field: &R::Field,
    multi_valued: bool,
) -> Vec<FacetOriginalValue> {
    let mut seen = HashSet::new();
    let mut values = Vec::new();
    for record in records {
        let field_value = record.field_value(field);
        for value in field_value.facet_values(multi_valued) {
            if seen.insert(value.clone()) {
                values.push(value.clone());
            }
        }
    }
    values
}

/// Number of records carrying each value of `field`. A record listing the
/// same value twice is counted once.
pub fn count_values<'a, R: Record + 'a>(
    records: impl IntoIterator<Item = &'a R>,
    field: &R::Field,
    multi_valued: bool,
) -> HashMap<FacetOriginalValue, usize> {
    let mut counts = HashMap::new();
    for record in records {
        let field_value = record.field_value(field);
        let distinct = field_value.facet_values(multi_valued).collect::<HashSet<_>>();
        for value in distinct {
            *counts.entry(value.clone()).or_insert(0) += 1;
        }
    }
    counts
}

/// Options for one facet: distinct values with labels and record counts,
/// ordered by `spec.order`.
pub fn extract_options<'a, R: Record + 'a>(
    records: impl IntoIterator<Item = &'a R>,
    spec: &FacetSpec<R::Field>,
) -> Vec<FacetOption> {
    let mut position: HashMap<FacetOriginalValue, usize> = HashMap::new();
    let mut options: Vec<FacetOption> = Vec::new();
    for record in records {
        let field_value = record.field_value(&spec.field);
        let distinct = field_value.facet_values(spec.multi_valued).collect::<Vec<_>>();
        for (i, value) in distinct.iter().enumerate() {
            if distinct[..i].contains(value) {
                continue;
            }
            if let Some(&idx) = position.get(*value) {
                options[idx].count += 1;
                continue;
            }
            position.insert((*value).clone(), options.len());
            options.push(FacetOption {
                value: (*value).clone(),
                label: spec.label_for(value),
                count: 1,
            });
        }
    }
    order_options(&mut options, spec.order);
    options
}

/// Stable reordering of options; `FirstSeen` leaves them untouched.
pub fn order_options(options: &mut [FacetOption], order: FacetOrder) {
    match order {
        FacetOrder::FirstSeen => {}
        FacetOrder::CountDesc => options.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label))),
        FacetOrder::Label => options.sort_by(|a, b| label_order(a, b).then_with(|| a.value.cmp(&b.value))),
    }
}

fn label_order(a: &FacetOption, b: &FacetOption) -> Ordering {
    match (a.unlabelled_int(), b.unlabelled_int()) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.label.cmp(&b.label),
    }
}
