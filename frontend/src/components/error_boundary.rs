//! Error surfaces: render failures anywhere in the app, and directories
//! whose bundled data cannot be read.

use dioxus::{logger::tracing, prelude::*};

use crate::routes::Route;


/// Bordered error card with a heading, a detail block and optional actions.
#[component]
fn ErrorPanel(heading: String, detail: String, children: Element) -> Element {
    rsx! {
        div {
            class: "x-error-panel",
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                gap: 12px;
                width: 100%;
                height: 100%;
                padding: 24px;
            ",
            h1 { style: "color: darkred; font-size: 30px; font-weight: 500; margin: 0;", "{heading}" }
            pre {
                style: "
                    color: darkred;
                    border: 1px solid rgba(139, 0, 0, 0.4);
                    border-radius: 8px;
                    padding: 12px;
                    max-width: 640px;
                    max-height: 360px;
                    overflow: auto;
                    text-wrap: auto;
                ",
                "{detail}"
            }
            div {
                style: "display: flex; flex-direction: row; gap: 12px;",
                {children}
            }
        }
    }
}

fn error_text(err: &ErrorContext) -> String {
    match err.error() {
        Some(error) => format!("{:#?}", error.0),
        None => "Unknown error".to_string(),
    }
}

/// Outermost boundary; `boundary_name` identifies which layer failed.
#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                let detail = error_text(&err);
                tracing::error!("render failure in {boundary_name}: {detail}");
                rsx! {
                    ErrorPanel {
                        heading: format!("Something went wrong ({boundary_name})"),
                        detail,
                        a { href: "/", class: "x-error-action", "Return to Home Page" }
                    }
                }
            },
            children
        }
    }
}

/// Keeps a failing directory from taking the navbar down with it.
#[component]
pub fn DirectoryErrorBoundary(directory: String, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                let detail = error_text(&err);
                tracing::error!("{directory} directory failed to render: {detail}");
                rsx! {
                    ErrorPanel {
                        heading: format!("The {directory} directory failed to render"),
                        detail,
                        button {
                            class: "x-error-action",
                            onclick: move |_| err.clear_errors(),
                            "Try Again"
                        }
                    }
                }
            },
            {children}
        }
    }
}

/// Shown instead of a directory whose records could not be parsed.
#[component]
pub fn DirectoryLoadError(directory: String, error_txt: String) -> Element {
    rsx! {
        ErrorPanel {
            heading: format!("Could not load {directory}"),
            detail: error_txt,
            Link { to: Route::HomePage {}, class: "x-error-action", "Back to all directories" }
        }
    }
}
