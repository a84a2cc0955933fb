use dioxus::prelude::*;

#[component]
pub fn Header(on_menu: EventHandler, on_refresh: EventHandler) -> Element {
    let version = env!("CARGO_PKG_VERSION");

    rsx! {
        header { class: "header",
            button {
                class: "btn-icon",
                title: "Toggle sidebar",
                onclick: move |_| on_menu.call(()),
                "\u{2630}"
            }
            div { class: "header-title",
                span { class: "header-brand", "Newsdesk" }
                span { class: "header-chip", "v{version}" }
            }
            div { class: "header-spacer" }
            button {
                class: "btn-icon",
                title: "Reload articles",
                onclick: move |_| on_refresh.call(()),
                "\u{27f3}"
            }
        }
    }
}
