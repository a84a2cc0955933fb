use dioxus::prelude::*;

use crate::models::article::Article;
use crate::state::orchestrator::Orchestrator;

/// Modal with the full side-by-side content comparison and references.
#[component]
pub fn DetailDialog(article: Article, on_close: EventHandler, on_changed: EventHandler) -> Element {
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
                    on_close.call(());
                } else {
                    inline_error.set(Some(outcome.message));
                }
            });
        }
    };

    let status = article.status;
    let updated_content = article
        .updated_content
        .clone()
        .unwrap_or_else(|| "Not processed yet".to_string());

    rsx! {
        div { class: "dialog-overlay", onclick: move |_| on_close.call(()),
            div {
                class: "dialog",
                onclick: move |e: MouseEvent| e.stop_propagation(),

                div { class: "dialog-title", "{article.original_title}" }
                div { class: "dialog-body",
                    div { class: "dialog-status",
                        span { class: "chip chip-{status.css()}", "{status.label()}" }
                    }

                    div { class: "dialog-columns",
                        div { class: "dialog-column",
                            div { class: "content-label", "Original Content" }
                            div { class: "content-box content-box-full", "{article.original_content}" }
                        }
                        div { class: "dialog-column",
                            div { class: "content-label content-label-enhanced", "Enhanced Content" }
                            div { class: "content-box content-box-enhanced content-box-full",
                                "{updated_content}"
                            }
                        }
                    }

                    if !article.reference_links.is_empty() {
                        div { class: "dialog-references",
                            div { class: "content-label", "Reference Sources" }
                            for (index, link) in article.reference_links.iter().enumerate() {
                                div { key: "{index}", class: "reference-card",
                                    if let Some(title) = link.title.as_ref() {
                                        div { class: "reference-title", "{title}" }
                                    }
                                    a {
                                        class: "reference-url",
                                        href: "{link.url}",
                                        target: "_blank",
                                        "{link.url}"
                                    }
                                }
                            }
                        }
                    }
                }

                if let Some(error) = inline_error() {
                    div { class: "inline-error", "{error}" }
                }

                div { class: "dialog-actions",
                    button { class: "btn-outline", onclick: move |_| on_close.call(()), "Close" }
                    if article.can_enhance() {
                        button {
                            class: "btn-primary",
                            disabled: busy(),
                            onclick: enhance,
                            if busy() { "Processing..." } else { "Enhance This Article" }
                        }
                    }
                }
            }
        }
    }
}
