//! State of one directory list view.
//!
//! A [`ListView`] owns the record collection, the view configuration, the
//! facet selections and the current page. Every mutation recomputes the
//! filtered dataset exactly once, before anything can read it:
//!
//! - a selection change resets the page to 1;
//! - a new collection or an explicit page request clamps the page into
//!   `[1, total_pages]`.

use serde::Serialize;

use crate::{
    facet::{FacetOption, FacetSpec, SelectMode, count_values, extract_options, extract_values, order_options},
    filter_state::{FilterState, SelectionSet},
    filtered_dataset::{apply_indices, record_matches_except},
    list_config::ListViewConfig,
    pagination::{Page, PageWindowItem, clamp_page, page_window, paginate, total_pages},
    record::{FacetOriginalValue, Record},
};


/// Everything a filter control needs to render one facet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacetSummary {
    pub display_name: String,
    pub select_mode: SelectMode,
    pub options: Vec<FacetOption>,
    pub selected: SelectionSet,
    /// Selected values absent from the current collection.
    pub orphaned: Vec<FacetOriginalValue>,
}

impl FacetSummary {
    pub fn is_selected(&self, value: &FacetOriginalValue) -> bool {
        self.selected.contains(value)
    }

    pub fn is_filtered(&self) -> bool {
        !self.selected.is_empty()
    }
}


type RecordPredicate<R> = Box<dyn Fn(&R) -> bool>;

pub struct ListView<R: Record> {
    config: ListViewConfig<R::Field>,
    records: Vec<R>,
    filter_state: FilterState<R::Field>,
    predicate: Option<RecordPredicate<R>>,
    filtered: Vec<usize>,
    current_page: usize,
}

impl<R: Record> ListView<R> {
    pub fn new(config: ListViewConfig<R::Field>, records: Vec<R>) -> Self {
        let mut view = Self {
            config,
            records,
            filter_state: FilterState::new(),
            predicate: None,
            filtered: Vec::new(),
            current_page: 1,
        };
        view.recompute();
        view
    }

    /// Extra condition every listed record must meet, on top of the facets.
    pub fn with_predicate(mut self, predicate: impl Fn(&R) -> bool + 'static) -> Self {
        self.predicate = Some(Box::new(predicate));
        self.recompute();
        self.current_page = 1;
        self
    }

    pub fn config(&self) -> &ListViewConfig<R::Field> {
        &self.config
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn filter_state(&self) -> &FilterState<R::Field> {
        &self.filter_state
    }

    /// Replaces the collection. Selections are kept; the page is clamped.
    pub fn set_records(&mut self, records: Vec<R>) {
        self.records = records;
        self.recompute();
        self.current_page = clamp_page(self.current_page, self.total_pages());
    }

    /// Replaces the view configuration. Selections on facets the new
    /// configuration no longer declares are dropped; the page is clamped.
    pub fn set_config(&mut self, config: ListViewConfig<R::Field>) {
        self.config = config;
        let facets = &self.config.facets;
        self.filter_state.retain_values(|facet, _| facets.iter().any(|spec| &spec.field == facet));
        self.recompute();
        self.current_page = clamp_page(self.current_page, self.total_pages());
    }

    pub fn toggle(&mut self, facet: &R::Field, value: FacetOriginalValue) {
        let mode = self.config.facet(facet).map(|spec| spec.select_mode).unwrap_or_default();
        self.filter_state.toggle_with_mode(facet.clone(), value, mode);
        self.selection_changed();
    }

    /// Toggle addressed by the facet's position in the configuration.
    /// Unknown positions are ignored.
    pub fn toggle_at(&mut self, facet_index: usize, value: FacetOriginalValue) {
        let Some(field) = self.config.facets.get(facet_index).map(|spec| spec.field.clone()) else {
            tracing::warn!("toggle on unknown facet #{facet_index}");
            return;
        };
        self.toggle(&field, value);
    }

    pub fn clear(&mut self, facet: &R::Field) {
        self.filter_state.clear(facet);
        self.selection_changed();
    }

    pub fn clear_at(&mut self, facet_index: usize) {
        if let Some(field) = self.config.facets.get(facet_index).map(|spec| spec.field.clone()) {
            self.clear(&field);
        }
    }

    pub fn clear_all(&mut self) {
        self.filter_state.clear_all();
        self.selection_changed();
    }

    pub fn set_page(&mut self, page: usize) {
        self.current_page = clamp_page(page, self.total_pages());
    }

    pub fn next_page(&mut self) {
        self.set_page(self.current_page + 1);
    }

    pub fn previous_page(&mut self) {
        self.set_page(self.current_page.saturating_sub(1));
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered.len(), self.config.page_size)
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn filtered_records(&self) -> impl Iterator<Item = &R> {
        self.filtered.iter().map(|&i| &self.records[i])
    }

    pub fn page(&self) -> Page<&R> {
        paginate(&self.filtered, self.current_page, self.config.page_size).map(|i| &self.records[i])
    }

    pub fn page_window(&self) -> Vec<PageWindowItem> {
        page_window(self.current_page, self.total_pages())
    }

    /// Options of one facet, derived from the whole collection. Counts are
    /// taken over the records that pass every other facet's selection.
    pub fn facet_options(&self, facet: &R::Field) -> Vec<FacetOption> {
        match self.config.facet(facet) {
            Some(spec) => self.options_for(spec),
            None => Vec::new(),
        }
    }

    pub fn facet_summaries(&self) -> Vec<FacetSummary> {
        self.config
            .facets
            .iter()
            .map(|spec| FacetSummary {
                display_name: spec.display_name.clone(),
                select_mode: spec.select_mode,
                options: self.options_for(spec),
                selected: self.filter_state.selection(&spec.field).cloned().unwrap_or_default(),
                orphaned: self.orphaned_selections(&spec.field),
            })
            .collect()
    }

    /// Selected values of `facet` that no record carries any more.
    pub fn orphaned_selections(&self, facet: &R::Field) -> Vec<FacetOriginalValue> {
        let Some(selection) = self.filter_state.selection(facet) else {
            return Vec::new();
        };
        let multi_valued = self.config.facet(facet).map(|spec| spec.multi_valued).unwrap_or(true);
        let present = extract_values(&self.records, facet, multi_valued);
        selection.iter().filter(|value| !present.contains(value)).cloned().collect()
    }

    fn options_for(&self, spec: &FacetSpec<R::Field>) -> Vec<FacetOption> {
        let mut options = extract_options(&self.records, spec);
        let context = self.records.iter().filter(|record| {
            self.passes_predicate(record)
                && record_matches_except(*record, &self.config.facets, &self.filter_state, Some(&spec.field))
        });
        let counts = count_values(context, &spec.field, spec.multi_valued);
        for option in options.iter_mut() {
            option.count = counts.get(&option.value).copied().unwrap_or(0);
        }
        order_options(&mut options, spec.order);
        options
    }

    fn passes_predicate(&self, record: &R) -> bool {
        self.predicate.as_ref().is_none_or(|predicate| predicate(record))
    }

    fn selection_changed(&mut self) {
        self.recompute();
        self.current_page = 1;
    }

    fn recompute(&mut self) {
        let mut filtered = apply_indices(&self.records, &self.config.facets, &self.filter_state);
        if self.predicate.is_some() {
            filtered.retain(|&i| self.passes_predicate(&self.records[i]));
        }
        self.filtered = filtered;
        tracing::debug!("list view: {} of {} records pass the filters", self.filtered.len(), self.records.len());
    }
}
