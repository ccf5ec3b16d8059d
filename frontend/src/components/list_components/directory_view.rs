//! A filterable, paginated directory of listing cards.

use common::{
    list_config::ListViewConfig,
    list_view::{FacetSummary, ListView},
    pagination::{Page, PageWindowItem},
    record::{FacetOriginalValue, Record},
};
use dioxus::{logger::tracing, prelude::*};

use crate::{
    components::list_components::{facet_panel::FacetPanel, listing_card::ListingCard, pagination_controls::PaginationControls},
    data_definitions::listing_card_data::{CardData, ListingCardData},
};


#[component]
pub fn DirectoryView<R: Record + ListingCardData + Clone + PartialEq + 'static>(
    title: String,
    records: ReadSignal<Vec<R>>,
    config: ReadSignal<ListViewConfig<R::Field>>,
) -> Element {
    let mut list_view = use_signal(|| ListView::new(config.peek().clone(), records.peek().clone()));

    // a new collection keeps the selections and clamps the page
    use_effect(move || {
        let records = records.read().clone();
        list_view.write().set_records(records);
    });
    // a new configuration drops selections on facets it no longer declares
    use_effect(move || {
        let config = config.read().clone();
        if list_view.peek().config() != &config {
            list_view.write().set_config(config);
        }
    });

    let facet_summaries: Memo<Vec<FacetSummary>> = use_memo(move || list_view.read().facet_summaries());
    let cards: Memo<Page<CardData>> = use_memo(move || list_view.read().page().map(|record| record.card_data()));
    let window: Memo<Vec<PageWindowItem>> = use_memo(move || list_view.read().page_window());
    let current_page = use_memo(move || cards.read().page);
    let total_pages = use_memo(move || cards.read().total_pages);

    let on_toggle = Callback::new(move |(facet_index, value): (usize, FacetOriginalValue)| {
        tracing::info!("toggle facet #{facet_index} value {value}");
        list_view.write().toggle_at(facet_index, value);
    });
    let on_clear = Callback::new(move |facet_index: usize| {
        list_view.write().clear_at(facet_index);
    });
    let on_clear_all = Callback::new(move |_: ()| {
        list_view.write().clear_all();
    });
    let set_page = Callback::new(move |page: usize| {
        list_view.write().set_page(page);
    });

    rsx! {
        div {
            id: "x-directory-view",
            style: "display: flex; flex-direction: row; width: 100%; height: 100%;",

            FacetPanel {
                summaries: facet_summaries,
                on_toggle,
                on_clear,
                on_clear_all,
            }

            div {
                style: "display: flex; flex-direction: column; flex-grow: 1; min-width: 0; overflow-y: auto; padding: 16px;",
                div {
                    style: "display: flex; flex-direction: row; align-items: baseline; gap: 16px;",
                    h1 { style: "font-size: 28px; font-weight: 400; margin: 0;", "{title}" }
                    ResultCountString { total_items: cards.read().total_items, total_records: list_view.read().records().len() }
                }

                if cards.read().items.is_empty() {
                    div {
                        style: "padding: 40px; text-align: center; color: rgba(0,0,0,0.5); font-size: 18px;",
                        "No results match the selected filters."
                    }
                } else {
                    div {
                        class: "x-listing-grid",
                        for (i, card) in cards.read().items.iter().cloned().enumerate() {
                            ListingCard {
                                key: "{current_page}-{i}",
                                card,
                                item_index: cards.read().first_item_number() + i,
                            }
                        }
                    }
                }

                PaginationControls {
                    current_page,
                    total_pages,
                    window,
                    set_page,
                }
            }
        }
    }
}

#[component]
fn ResultCountString(total_items: usize, total_records: usize) -> Element {
    if total_items == total_records {
        rsx! { span { style: "color: rgb(75, 87, 112);", "{total_items} results" } }
    } else {
        rsx! { span { style: "color: rgb(75, 87, 112);", "{total_items} of {total_records} results" } }
    }
}
