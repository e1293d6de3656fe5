//! PageFrame — standard root wrapper for every page.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`                  — `"{entity}--{category}"`, e.g. `"u001_generate_form--usecase"`
//!   - `data-page-category`  — one of the PAGE_CAT_* constants

use super::page_standard::*;
use leptos::prelude::*;

/// Root wrapper that sets standard metadata on a page.
///
/// `custom` pages get the `page--custom` modifier, everything else the plain
/// `page` class.
#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`.
    #[prop(into)]
    page_id: String,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    /// Inline style for the root element.
    #[prop(optional)]
    style: &'static str,
    children: Children,
) -> impl IntoView {
    if !is_valid_page_id(&page_id) || !is_known_category(category) {
        log::warn!("PageFrame: non-standard page metadata id='{page_id}' category='{category}'");
    }

    let class = match category {
        PAGE_CAT_CUSTOM => "page page--custom",
        _ => "page",
    };

    view! {
        <div id=page_id class=class style=style data-page-category=category>
            {children()}
        </div>
    }
}
