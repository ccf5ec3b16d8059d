//! Facet filter controls for a directory list view.

use common::{
    facet::SelectMode,
    list_view::FacetSummary,
    record::FacetOriginalValue,
};
use dioxus::prelude::*;
use dioxus_free_icons::{
    Icon,
    icons::{
        md_navigation_icons::{MdArrowDropDown, MdClose},
        md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank, MdRadioButtonChecked, MdRadioButtonUnchecked},
    },
};


#[derive(Clone, Copy)]
struct FacetPanelContext {
    on_toggle: Callback<(usize, FacetOriginalValue)>,
    on_clear: Callback<usize>,
}

#[component]
pub fn FacetPanel(
    summaries: ReadSignal<Vec<FacetSummary>>,
    on_toggle: Callback<(usize, FacetOriginalValue)>,
    on_clear: Callback<usize>,
    on_clear_all: Callback<()>,
) -> Element {
    use_context_provider(|| FacetPanelContext { on_toggle, on_clear });
    let any_filtered = use_memo(move || summaries.read().iter().any(FacetSummary::is_filtered));

    rsx! {
        div {
            id: "x-facet-panel",
            style: "
                display: flex;
                flex-direction: column;
                gap: 12px;
                width: 300px;
                min-width: 300px;
                padding: 16px;
                border-right: 1px solid rgba(0,0,0,0.1);
                overflow-y: auto;
            ",
            div {
                style: "display: flex; flex-direction: row; align-items: center;",
                h2 { style: "font-size: 20px; font-weight: 500; margin: 0;", "Filters" }
                div { style: "flex-grow: 1;" }
                button {
                    disabled: !any_filtered(),
                    style: "
                        cursor: pointer;
                        border: 1px solid rgba(0,0,0,0.3);
                        border-radius: 1000px;
                        background: white;
                        padding: 4px 12px;
                        font-size: 14px;
                    ",
                    onclick: move |_| on_clear_all(()),
                    "Clear all"
                }
            }
            for (facet_index, summary) in summaries.read().iter().cloned().enumerate() {
                FacetGroup {
                    key: "{facet_index}-{summary.display_name}",
                    facet_index,
                    summary,
                }
            }
        }
    }
}


#[component]
fn FacetGroup(facet_index: usize, summary: ReadSignal<FacetSummary>) -> Element {
    let context = use_context::<FacetPanelContext>();
    let mut is_expanded = use_signal(|| true);
    let is_filtered = use_memo(move || summary.read().is_filtered());
    let border_color = use_memo(move || if is_filtered() { "rgba(0,0,255,0.9)" } else { "rgba(0,0,0,0.2)" });
    let FacetSummary { display_name, select_mode, options, orphaned, .. } = summary.read().clone();

    rsx! {
        div {
            style: "
                border: 2px solid {border_color()};
                border-radius: 10px;
                padding: 8px;
                background-color: white;
                box-shadow: 0 0 10px 0 rgba(0, 0, 0, 0.05);
            ",
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 6px; cursor: pointer;",
                onclick: move |_| is_expanded.toggle(),
                Icon { icon: MdArrowDropDown, style: "width: 20px; height: 20px; color:rgba(0,0,0,0.9);" }
                span { style: "font-size: 16px; font-weight: 500;", "{display_name}" }
                div { style: "flex-grow: 1;" }
                if is_filtered() {
                    button {
                        style: "cursor: pointer; border: none; background: none; padding: 0; display: flex;",
                        title: "Clear {display_name}",
                        onclick: move |e: MouseEvent| {
                            e.stop_propagation();
                            context.on_clear.call(facet_index);
                        },
                        Icon { icon: MdClose, style: "width: 18px; height: 18px; color: rgba(0,0,0,0.6);" }
                    }
                }
            }
            if is_expanded() {
                if options.is_empty() && orphaned.is_empty() {
                    div { style: "color: rgba(0,0,0,0.5); padding: 4px;", "No values" }
                }
                ul {
                    style: "list-style: none; margin: 0; padding: 0;",
                    for option in options {
                        li {
                            key: "{option.value:?}",
                            FacetCheckbox {
                                facet_index,
                                select_mode,
                                checked: summary.read().is_selected(&option.value),
                                facet_value: option.value.clone(),
                                display_string: option.label.clone(),
                                result_count: option.count,
                            }
                        }
                    }
                    // still selected but no longer present in the collection
                    for value in orphaned {
                        li {
                            key: "missing-{value:?}",
                            FacetCheckbox {
                                facet_index,
                                select_mode,
                                checked: true,
                                facet_value: value.clone(),
                                display_string: format!("Missing: {value}"),
                                result_count: 0usize,
                            }
                        }
                    }
                }
            }
        }
    }
}


#[component]
fn FacetCheckbox(
    facet_index: usize,
    select_mode: SelectMode,
    checked: bool,
    facet_value: ReadSignal<FacetOriginalValue>,
    display_string: ReadSignal<String>,
    result_count: ReadSignal<usize>,
) -> Element {
    let context = use_context::<FacetPanelContext>();
    let text_color = if *result_count.read() == 0 && !checked { "rgba(0,0,0,0.4)" } else { "rgb(0,0,0)" };

    rsx! {
        div {
            class: "x-facet-list-item",
            style: "
                display: flex;
                flex-direction: row;
                gap: 10px;
                cursor: pointer;
                padding: 4px;
                margin: 2px;
                align-items: center;
            ",
            onclick: move |_e| {
                context.on_toggle.call((facet_index, facet_value.read().clone()));
            },

            {
                match (select_mode, checked) {
                    (SelectMode::Multi, true) => rsx! { Icon { icon: MdCheckBox, style: "width: 22px; height: 22px; color: rgb(28, 33, 45); flex-shrink: 0;" } },
                    (SelectMode::Multi, false) => rsx! { Icon { icon: MdCheckBoxOutlineBlank, style: "width: 22px; height: 22px; color: black; flex-shrink: 0;" } },
                    (SelectMode::Single, true) => rsx! { Icon { icon: MdRadioButtonChecked, style: "width: 22px; height: 22px; color: rgb(28, 33, 45); flex-shrink: 0;" } },
                    (SelectMode::Single, false) => rsx! { Icon { icon: MdRadioButtonUnchecked, style: "width: 22px; height: 22px; color: black; flex-shrink: 0;" } },
                }
            }
            div {
                style: "
                    font-size: 16px;
                    line-height: 24px;
                    color: {text_color};
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                    min-width: 0;
                ",
                "{display_string}"
            }
            div { style: "flex: 1 1 auto;", }
            div {
                style: "
                    font-size: 16px;
                    line-height: 24px;
                    color: rgba(28, 33, 45, 0.7);
                    flex-shrink: 0;
                ",
                "{result_count}"
            }
        }
    }
}
