//! Page navigation for directory list views.

use common::pagination::PageWindowItem;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdArrowBack, MdArrowForward}};

use crate::data_definitions::debounce::use_debouncer;

const PAGE_JUMP_DEBOUNCE_MS: u32 = 400;

#[component]
pub fn PaginationControls(
    current_page: ReadSignal<usize>,
    total_pages: ReadSignal<usize>,
    window: ReadSignal<Vec<PageWindowItem>>,
    set_page: Callback<usize>,
) -> Element {
    let can_go_to_previous_page = use_memo(move || current_page() > 1);
    let can_go_to_next_page = use_memo(move || current_page() < total_pages());

    rsx! {
        div {
            id: "x-pagination-controls",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: center;
                gap: 8px;
                padding: 12px;
            ",
            NavigationButton {
                icon: MdArrowBack,
                label: "Previous Page",
                disabled: !can_go_to_previous_page(),
                onclick: move |_| set_page(current_page().saturating_sub(1)),
            }
            for (i, item) in window.read().iter().copied().enumerate() {
                {
                    match item {
                        PageWindowItem::Page(page) => rsx! {
                            PageNumberButton {
                                key: "page-{page}",
                                page,
                                is_current: page == current_page(),
                                set_page,
                            }
                        },
                        PageWindowItem::Ellipsis => rsx! {
                            span {
                                key: "ellipsis-{i}",
                                style: "color: rgba(0,0,0,0.5); padding: 0 4px;",
                                "…"
                            }
                        },
                    }
                }
            }
            NavigationButton {
                icon: MdArrowForward,
                label: "Next Page",
                disabled: !can_go_to_next_page(),
                onclick: move |_| set_page(current_page() + 1),
            }
            PageJumpInput { total_pages, set_page }
        }
    }
}

#[component]
fn PageNumberButton(page: usize, is_current: bool, set_page: Callback<usize>) -> Element {
    let (background, color) = if is_current { ("rgb(28, 33, 45)", "white") } else { ("white", "black") };
    rsx! {
        button {
            style: "
                min-width: 32px;
                height: 32px;
                background: {background};
                color: {color};
                border: none;
                border-radius: 8px;
                box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.16);
                cursor: pointer;
                font-size: 15px;
            ",
            onclick: move |_| {
                if !is_current {
                    set_page(page);
                }
            },
            "{page}"
        }
    }
}

/// Typing a page number jumps there once the input settles.
#[component]
fn PageJumpInput(total_pages: ReadSignal<usize>, set_page: Callback<usize>) -> Element {
    let mut debouncer = use_debouncer(PAGE_JUMP_DEBOUNCE_MS);
    rsx! {
        input {
            r#type: "number",
            min: "1",
            max: "{total_pages}",
            placeholder: "Go to",
            style: "
                width: 70px;
                height: 28px;
                margin-left: 12px;
                border: 1px solid rgba(0,0,0,0.3);
                border-radius: 6px;
                padding: 0 6px;
            ",
            oninput: move |e: FormEvent| {
                let value = e.value();
                debouncer.write().call(move || {
                    // out-of-range numbers are clamped by the view
                    if let Ok(page) = value.trim().parse::<usize>() {
                        set_page(page);
                    }
                });
            },
        }
    }
}

#[component]
pub fn NavigationButton<I: dioxus_free_icons::IconShape + Clone + PartialEq + 'static>(icon: I, label: String, disabled: ReadSignal<bool>, onclick: Callback<()>) -> Element {
    let btn_color = use_memo(move || if *disabled.read() { "rgba(0,0,0,0.3)" } else { "rgba(0,0,0,1)" });
    let btn_cursor = use_memo(move || if *disabled.read() { "not-allowed" } else { "pointer" });
    rsx! {
        button {
            disabled: *disabled.read(),
            title: "{label}",
            style: "
                width: 32px;
                height: 32px;
                background: white;
                border: none;
                border-radius: 8px;
                padding: 4px;
                box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.16);
                cursor: {btn_cursor};
            ",
            onclick: move |_| {
                if !*disabled.read() {
                    onclick(());
                }
            },
            Icon { icon: icon, style: "width: 22px; height: 22px; color: {btn_color};" }
        }
    }
}
