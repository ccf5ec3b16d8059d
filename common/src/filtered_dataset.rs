//! Applies facet selections to a record collection.
//!
//! Selections combine with AND across facets and OR within one facet.
//! Filtering is stable: surviving records keep their relative order.

use crate::{facet::FacetSpec, filter_state::FilterState, record::Record};


/// Whether `record` satisfies every non-empty selection in `state`.
pub fn record_matches<R: Record>(record: &R, specs: &[FacetSpec<R::Field>], state: &FilterState<R::Field>) -> bool {
    record_matches_except(record, specs, state, None)
}

/// Same as [`record_matches`], ignoring the selection of `skipped`.
///
/// Used to count facet options: a facet's own selection must not hide the
/// other values it offers.
pub fn record_matches_except<R: Record>(
    record: &R,
    specs: &[FacetSpec<R::Field>],
    state: &FilterState<R::Field>,
    skipped: Option<&R::Field>,
) -> bool {
    state.selections().iter().all(|(facet, selection)| {
        if selection.is_empty() || skipped == Some(facet) {
            return true;
        }
        // a selection with no declared facet reads the field leniently
        let multi_valued = specs.iter().find(|spec| &spec.field == facet).map(|spec| spec.multi_valued).unwrap_or(true);
        record.field_value(facet).facet_values(multi_valued).any(|value| selection.contains(value))
    })
}

pub fn apply<'a, R: Record>(records: &'a [R], specs: &[FacetSpec<R::Field>], state: &FilterState<R::Field>) -> Vec<&'a R> {
    records.iter().filter(|record| record_matches(*record, specs, state)).collect()
}

/// Positions in `records` of the records passing the filter.
pub fn apply_indices<R: Record>(records: &[R], specs: &[FacetSpec<R::Field>], state: &FilterState<R::Field>) -> Vec<usize> {
    if state.is_unrestricted() {
        return (0..records.len()).collect();
    }
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| record_matches(*record, specs, state))
        .map(|(i, _)| i)
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{FacetOriginalValue, FieldValue};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Field {
        Purpose,
        Themes,
        Country,
    }

    #[derive(Debug, PartialEq)]
    struct Project {
        id: u32,
        purpose: &'static str,
        themes: Vec<&'static str>,
        country: Option<&'static str>,
    }

    impl Record for Project {
        type Field = Field;

        fn field_value(&self, field: &Field) -> FieldValue {
            match field {
                Field::Purpose => FieldValue::single(self.purpose),
                Field::Themes => FieldValue::many(self.themes.iter().copied()),
                Field::Country => FieldValue::optional(self.country),
            }
        }
    }

    fn v(s: &str) -> FacetOriginalValue {
        FacetOriginalValue::from(s)
    }

    fn specs() -> Vec<FacetSpec<Field>> {
        vec![
            FacetSpec::new(Field::Purpose, "Purpose"),
            FacetSpec::new(Field::Themes, "Themes").multi_valued(),
            FacetSpec::new(Field::Country, "Country"),
        ]
    }

    fn projects() -> Vec<Project> {
        vec![
            Project { id: 1, purpose: "Showcase", themes: vec!["AI"], country: Some("US") },
            Project { id: 2, purpose: "Grant", themes: vec!["Energy", "AI"], country: Some("FR") },
            Project { id: 3, purpose: "Research", themes: vec![], country: None },
            Project { id: 4, purpose: "Grant", themes: vec!["Health"], country: Some("US") },
            Project { id: 5, purpose: "Showcase", themes: vec!["Energy"], country: Some("DE") },
        ]
    }

    fn ids(records: &[&Project]) -> Vec<u32> {
        records.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_no_selection_returns_everything_in_order() {
        let records = projects();
        let filtered = apply(&records, &specs(), &FilterState::new());
        assert_eq!(ids(&filtered), vec![1, 2, 3, 4, 5]);
        assert_eq!(apply_indices(&records, &specs(), &FilterState::new()), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_values_within_a_facet_are_ored() {
        let records = projects();
        let mut state = FilterState::new();
        state.toggle(Field::Purpose, v("Showcase"));
        state.toggle(Field::Purpose, v("Grant"));
        assert_eq!(ids(&apply(&records, &specs(), &state)), vec![1, 2, 4, 5]);
    }

    #[test]
    fn test_facets_are_anded() {
        let records = projects();
        let mut state = FilterState::new();
        state.toggle(Field::Purpose, v("Grant"));
        state.toggle(Field::Country, v("US"));
        assert_eq!(ids(&apply(&records, &specs(), &state)), vec![4]);
    }

    #[test]
    fn test_multi_valued_field_matches_any_element() {
        let records = projects();
        let mut state = FilterState::new();
        state.toggle(Field::Themes, v("AI"));
        assert_eq!(ids(&apply(&records, &specs(), &state)), vec![1, 2]);
    }

    #[test]
    fn test_missing_value_never_matches_a_selection() {
        let records = projects();
        let mut state = FilterState::new();
        state.toggle(Field::Country, v("US"));
        state.toggle(Field::Country, v("FR"));
        state.toggle(Field::Country, v("DE"));
        assert!(!ids(&apply(&records, &specs(), &state)).contains(&3));
    }

    #[test]
    fn test_unknown_value_filters_everything_out() {
        let records = projects();
        let mut state = FilterState::new();
        state.toggle(Field::Purpose, v("Nope"));
        assert!(apply(&records, &specs(), &state).is_empty());
        assert!(apply_indices(&records, &specs(), &state).is_empty());
    }

    #[test]
    fn test_kept_and_dropped_records_follow_the_rule() {
        let records = projects();
        let mut state = FilterState::new();
        state.toggle(Field::Themes, v("Energy"));
        state.toggle(Field::Country, v("DE"));
        state.toggle(Field::Country, v("FR"));
        let kept = apply(&records, &specs(), &state);
        for record in &records {
            let passes = state.selections().iter().all(|(facet, selection)| {
                record.field_value(facet).facet_values(true).any(|value| selection.contains(value))
            });
            assert_eq!(passes, kept.contains(&record));
        }
    }

    #[test]
    fn test_skipped_facet_is_ignored() {
        let records = projects();
        let record = &records[0];
        let mut state = FilterState::new();
        state.toggle(Field::Purpose, v("Grant"));
        assert!(!record_matches(record, &specs(), &state));
        assert!(record_matches_except(record, &specs(), &state, Some(&Field::Purpose)));
    }
}
