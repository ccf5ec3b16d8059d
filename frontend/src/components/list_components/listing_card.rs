//! Card shown for each record on the current page.

use dioxus::prelude::*;

use crate::data_definitions::listing_card_data::CardData;

#[component]
pub fn ListingCard(card: ReadSignal<CardData>, item_index: usize) -> Element {
    let CardData { title, subtitle, description, badges } = card.read().clone();
    rsx! {
        div {
            class: "x-listing-card",
            style: "
                display: flex;
                flex-direction: column;
                gap: 7px;
                background: white;
                border: 3px solid #AAAAAA33;
                border-radius: 8px;
                padding: 12px 16px;
                box-sizing: border-box;
                min-height: 160px;
            ",
            div {
                style: "display: flex; flex-direction: row; align-items: baseline; gap: 8px;",
                span {
                    style: "font-size: 16px; font-weight: 200; color: rgba(0, 0, 0, 0.5);",
                    "{item_index}."
                }
                span {
                    style: "font-size: 18px; font-weight: 500; overflow: hidden; text-overflow: ellipsis;",
                    "{title}"
                }
            }
            if !subtitle.is_empty() {
                div { style: "font-size: 14px; color: rgb(75, 87, 112);", "{subtitle}" }
            }
            if !description.is_empty() {
                p {
                    style: "font-size: 14px; line-height: 20px; margin: 0; color: rgba(0,0,0,0.8);",
                    "{description}"
                }
            }
            div { style: "flex-grow: 1;" }
            div {
                style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 6px;",
                for badge in badges {
                    span {
                        key: "{badge}",
                        style: "
                            font-size: 12px;
                            padding: 2px 8px;
                            border-radius: 1000px;
                            background-color: rgba(64, 150, 255, 0.12);
                            color: rgb(28, 33, 45);
                        ",
                        "{badge}"
                    }
                }
            }
        }
    }
}
