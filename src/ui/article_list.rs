use dioxus::prelude::*;

use crate::models::article::Article;
use crate::state::orchestrator::Orchestrator;
use crate::ui::detail_dialog::DetailDialog;
use crate::ui::interaction::InteractionState;

const PREVIEW_CHARS: usize = 500;

#[component]
pub fn ArticleList(articles: Vec<Article>, loading: bool, on_changed: EventHandler) -> Element {
    let mut interaction = use_signal(InteractionState::default);

    if loading && articles.is_empty() {
        return rsx! {
            div { class: "list-state",
                div { class: "progress-strip", div { class: "progress-strip-fill" } }
                div { class: "list-state-text", "Loading articles..." }
            }
        };
    }

    if articles.is_empty() {
        return rsx! {
            div { class: "list-state",
                div { class: "list-state-title", "No articles found" }
                div { class: "list-state-text", "Click \"Scrape 5 Oldest Articles\" to get started" }
            }
        };
    }

    let dialog_article = interaction
        .read()
        .dialog_id()
        .and_then(|id| articles.iter().find(|a| a.id == id))
        .cloned();

    rsx! {
        div { class: "article-list",
            for article in articles.iter() {
                ArticleCard {
                    key: "{article.id}",
                    article: article.clone(),
                    expanded: interaction.read().is_expanded(&article.id),
                    on_toggle: {
                        let id = article.id.clone();
                        move |_| interaction.write().toggle_expanded(&id)
                    },
                    on_detail: {
                        let id = article.id.clone();
                        move |_| interaction.write().open_dialog(&id)
                    },
                    on_changed,
                }
            }
        }

        if let Some(article) = dialog_article {
            DetailDialog {
                article,
                on_close: move |_| interaction.write().close_dialog(),
                on_changed,
            }
        }
    }
}

#[component]
fn ArticleCard(
    article: Article,
    expanded: bool,
    on_toggle: EventHandler,
    on_detail: EventHandler,
    on_changed: EventHandler,
) -> Element {
    let orch = use_context::<Orchestrator>();
    let mut busy = use_signal(|| false);
    let mut inline_error = use_signal(|| None::<String>);

    let enhance = {
        let orch = orch.clone();
        let id = article.id.clone();
        move |_| {
            let orch = orch.clone();
            let id = id.clone();
            busy.set(true);
            inline_error.set(None);
            spawn(async move {
                let outcome = orch.enhance_article(&id).await;
                busy.set(false);
                if outcome.success {
                    on_changed.call(());
                } else {
                    inline_error.set(Some(outcome.message));
                }
            });
        }
    };

    let status = article.status;
    let scraped = article.scraped_date.format("%Y-%m-%d").to_string();
    let updated_date = article.last_updated.map(|d| d.format("%Y-%m-%d").to_string());
    let sources = article.source_count();
    let original_preview = preview(&article.original_content);
    let updated_preview = article.updated_content.as_ref().map(|c| preview(c));

    rsx! {
        div { class: "article-card",
            div { class: "card-bar card-bar-{status.css()}" }
            div { class: "card-body",
                div { class: "card-head",
                    div { class: "card-titles",
                        div { class: "card-title", "{article.original_title}" }
                        if let Some(updated_title) = article.updated_title.as_ref() {
                            div { class: "card-updated-title", "\u{21c4} {updated_title}" }
                        }
                    }
                    span { class: "chip chip-{status.css()}", "{status.label()}" }
                }

                div { class: "card-meta",
                    span { "\u{1f4c5} {scraped}" }
                    if let Some(updated_date) = updated_date {
                        span { class: "meta-updated", "\u{1f504} {updated_date}" }
                    }
                    if sources > 0 {
                        span { class: "meta-sources", "\u{1f50d} {sources} sources found" }
                    }
                }

                if expanded {
                    div { class: "card-content",
                        div { class: "content-label", "Original Content:" }
                        div { class: "content-box", "{original_preview}" }

                        if let Some(updated_preview) = updated_preview {
                            div { class: "content-label content-label-enhanced", "Enhanced Content:" }
                            div { class: "content-box content-box-enhanced", "{updated_preview}" }
                        }

                        if !article.reference_links.is_empty() {
                            div { class: "content-label", "Reference Sources:" }
                            div { class: "reference-grid",
                                for (index, link) in article.reference_links.iter().enumerate() {
                                    {
                                        let label = link
                                            .title
                                            .clone()
                                            .unwrap_or_else(|| "Reference Source".to_string());
                                        rsx! {
                                            a {
                                                key: "{index}",
                                                class: "reference-link",
                                                href: "{link.url}",
                                                target: "_blank",
                                                "{label}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                if let Some(error) = inline_error() {
                    div { class: "inline-error", "{error}" }
                }

                div { class: "card-actions",
                    div {
                        if article.can_enhance() {
                            button {
                                class: "btn-primary",
                                disabled: busy(),
                                onclick: enhance,
                                if busy() { "Processing..." } else { "\u{2728} Enhance with AI" }
                            }
                        }
                        button {
                            class: "btn-outline",
                            onclick: move |_| on_detail.call(()),
                            "View Details"
                        }
                    }
                    button {
                        class: if expanded { "btn-icon expand-toggle expand-toggle-open" } else { "btn-icon expand-toggle" },
                        onclick: move |_| on_toggle.call(()),
                        "\u{25be}"
                    }
                }
            }
        }
    }
}

/// First `PREVIEW_CHARS` characters of the content, on a char boundary.
fn preview(text: &str) -> String {
    if text.chars().count() <= PREVIEW_CHARS {
        text.to_string()
    } else {
        let cut: String = text.chars().take(PREVIEW_CHARS).collect();
        format!("{cut}...")
    }
}
