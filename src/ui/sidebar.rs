use dioxus::prelude::*;

use crate::models::view::ViewSelection;

#[component]
pub fn Sidebar(
    open: bool,
    active: ViewSelection,
    api_ok: bool,
    on_close: EventHandler,
    on_select: EventHandler<ViewSelection>,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        div { class: "sidebar-overlay", onclick: move |_| on_close.call(()) }
        nav { class: "sidebar",
            div { class: "sidebar-title", "Views" }
            for view in ViewSelection::ALL_VIEWS {
                {
                    let entry_class = if view == active {
                        "sidebar-entry sidebar-entry-active"
                    } else {
                        "sidebar-entry"
                    };
                    let dot_class = match view {
                        ViewSelection::All => "view-dot view-dot-all",
                        ViewSelection::Original => "view-dot view-dot-original",
                        ViewSelection::Updated => "view-dot view-dot-updated",
                        ViewSelection::Processing => "view-dot view-dot-processing",
                        ViewSelection::Failed => "view-dot view-dot-failed",
                    };
                    rsx! {
                        button {
                            class: "{entry_class}",
                            onclick: move |_| {
                                on_select.call(view);
                                on_close.call(());
                            },
                            span { class: "{dot_class}" }
                            "{view.label()}"
                        }
                    }
                }
            }
            div { class: "sidebar-status",
                div { class: "sidebar-status-title", "System Status" }
                if api_ok {
                    div { class: "status-line status-ok", "API online" }
                } else {
                    div { class: "status-line status-bad", "API unreachable" }
                }
            }
        }
    }
}
