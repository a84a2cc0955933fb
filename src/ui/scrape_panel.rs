use dioxus::prelude::*;

use crate::state::orchestrator::Orchestrator;
use crate::state::store::ArticleStore;

/// "Quick actions" panel: triggers the bulk scrape and shows its inline
/// outcome. The store's scrape flag is raised for the duration so the whole
/// dashboard reports one busy state.
#[component]
pub fn ScrapePanel(
    store: Signal<ArticleStore>,
    loading: bool,
    on_changed: EventHandler,
) -> Element {
    let orch = use_context::<Orchestrator>();
    let mut scraping = use_signal(|| false);
    let mut message = use_signal(|| None::<(bool, String)>);
    // Bumped per message so a stale auto-clear can't wipe a newer one.
    let mut message_gen = use_signal(|| 0u32);

    let start_scrape = move |_| {
        let orch = orch.clone();
        let mut store = store;
        scraping.set(true);
        message.set(None);

        spawn(async move {
            store.write().set_scraping(true);
            let outcome = orch.scrape_batch().await;
            store.write().set_scraping(false);
            scraping.set(false);

            let generation = message_gen() + 1;
            message_gen.set(generation);
            message.set(Some((outcome.success, outcome.message.clone())));

            if outcome.success {
                on_changed.call(());
                // Success note fades out after a few seconds, unless a
                // newer message replaced it in the meantime.
                tokio::time::sleep(std::time::Duration::from_secs(5)).await;
                if message_gen() == generation {
                    message.set(None);
                }
            }
        });
    };

    rsx! {
        div { class: "panel scrape-panel",
            h2 { class: "panel-title", "Quick Actions" }
            p { class: "panel-text",
                "Start by scraping the 5 oldest source articles. They are stored by the "
                "service and become ready for AI enhancement."
            }
            div { class: "panel-list",
                div { class: "panel-list-title", "What happens next:" }
                ul {
                    li { "Scrape 5 articles from the source site" }
                    li { "Search the web for similar content" }
                    li { "AI-enhanced formatting and structure" }
                    li { "Automatic reference citation" }
                }
            }

            if let Some((success, text)) = message() {
                {
                    let alert_class = if success { "alert alert-success" } else { "alert alert-error" };
                    rsx! {
                        div { class: "{alert_class}",
                            span { "{text}" }
                            button {
                                class: "alert-close",
                                onclick: move |_| message.set(None),
                                "\u{2715}"
                            }
                        }
                    }
                }
            }

            button {
                class: "btn-primary btn-scrape",
                disabled: scraping() || loading,
                onclick: start_scrape,
                if scraping() { "Scraping Articles..." } else { "Scrape 5 Oldest Articles" }
            }

            if scraping() {
                div { class: "progress-strip",
                    div { class: "progress-strip-fill" }
                }
            }
        }
    }
}
