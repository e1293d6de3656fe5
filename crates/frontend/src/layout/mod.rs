//! Root layout: the HTML shell every page renders inside.

use contracts::shared::AppMetadata;
use leptos::prelude::*;
use web_sys::window;

/// Application shell.
///
/// Writes [`AppMetadata`] into the document on mount and renders the page
/// inside `.app-layout`.
#[component]
pub fn RootLayout(children: Children) -> impl IntoView {
    apply_document_metadata(&AppMetadata::default());

    view! {
        <div class="app-layout">
            {children()}
        </div>
    }
}

/// Set `document.title`, `<meta name="description">` and `<html lang>`.
///
/// Missing window, document or head is skipped.
pub fn apply_document_metadata(meta: &AppMetadata) {
    let document = match window().and_then(|w| w.document()) {
        Some(doc) => doc,
        None => return,
    };

    document.set_title(&meta.title);

    if let Some(html) = document.document_element() {
        let _ = html.set_attribute("lang", &meta.lang);
    }

    let head = match document.head() {
        Some(h) => h,
        None => return,
    };

    let existing = document
        .query_selector("meta[name=\"description\"]")
        .ok()
        .flatten();
    let description = match existing {
        Some(elem) => elem,
        None => match document.create_element("meta") {
            Ok(elem) => {
                let _ = elem.set_attribute("name", "description");
                let _ = head.append_child(&elem);
                elem
            }
            Err(e) => {
                log::warn!("failed to create description meta: {e:?}");
                return;
            }
        },
    };
    let _ = description.set_attribute("content", &meta.description);
}
