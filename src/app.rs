use chrono::Datelike;
use dioxus::prelude::*;

use crate::models::view::ViewSelection;
use crate::state::orchestrator::Orchestrator;
use crate::state::store::ArticleStore;
use crate::ui::{
    article_list::ArticleList, header::Header, scrape_panel::ScrapePanel, sidebar::Sidebar,
    stats_cards::StatsRow,
};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Clone)]
pub struct StartupError(pub String);

/// Shown instead of the dashboard when configuration or client setup fails.
#[component]
pub fn StartupErrorApp() -> Element {
    let err = use_context::<StartupError>();

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        div { class: "app",
            header { class: "header",
                div { class: "header-title",
                    span { class: "header-brand", "Newsdesk" }
                }
            }
            div { class: "startup-error-banner", "{err.0}" }
        }
    }
}

#[component]
pub fn App() -> Element {
    let orch = use_context::<Orchestrator>();
    let mut store = use_signal(ArticleStore::new);
    // Mirror of the orchestrator's refresh token; the driver effect below
    // reacts to it. Manual reloads get their own counter.
    let mut sync_token = use_signal(|| 0u64);
    let mut manual_tick = use_signal(|| 0u64);
    let mut sidebar_open = use_signal(|| false);
    let mut active_view = use_signal(|| ViewSelection::All);

    // Refresh driver: runs once at startup and once per trigger. The store
    // coalesces triggers that land while a fetch is in flight, so there is
    // never more than one list request outstanding.
    let gateway = orch.gateway();
    use_effect(move || {
        let _ = sync_token();
        let _ = manual_tick();
        let gateway = gateway.clone();
        spawn(async move {
            if !store.write().begin_refresh() {
                return;
            }
            loop {
                let result = gateway.list_articles().await;
                if !store.write().complete_refresh(result) {
                    break;
                }
            }
        });
    });

    // Children report successful mutations here; pull the token forward so
    // the driver issues one reload.
    let on_changed = {
        let orch = orch.clone();
        move |_| {
            let token = orch.refresh_token();
            if token != sync_token() {
                sync_token.set(token);
            }
        }
    };

    let (loading, stats, error, filtered) = {
        let snapshot = store.read();
        (
            snapshot.loading(),
            snapshot.stats(),
            snapshot.error().map(String::from),
            active_view().filter(snapshot.articles()),
        )
    };
    let year = chrono::Utc::now().year();

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        div { class: "app",
            Header {
                on_menu: move |_| {
                    let open = sidebar_open();
                    sidebar_open.set(!open);
                },
                on_refresh: move |_| *manual_tick.write() += 1,
            }
            Sidebar {
                open: sidebar_open(),
                active: active_view(),
                api_ok: error.is_none(),
                on_close: move |_| sidebar_open.set(false),
                on_select: move |view| active_view.set(view),
            }

            main { class: "main",
                if let Some(error) = error {
                    div { class: "banner banner-error",
                        span { "{error}" }
                        button {
                            class: "banner-close",
                            onclick: move |_| store.write().clear_error(),
                            "\u{2715}"
                        }
                    }
                }

                StatsRow { stats, loading }

                div { class: "content-grid",
                    div { class: "content-left",
                        ScrapePanel { store, loading, on_changed: on_changed.clone() }
                    }
                    div { class: "content-right panel",
                        div { class: "list-head",
                            h2 { class: "panel-title", "Articles ({filtered.len()})" }
                            span { class: "list-view-label", "View: {active_view().label()}" }
                        }
                        ArticleList { articles: filtered, loading, on_changed }
                    }
                }

                footer { class: "footer",
                    "Newsdesk \u{2022} Article scraping & AI enhancement \u{2022} {year}"
                }
            }
        }
    }
}
