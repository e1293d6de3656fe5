//! Page category constants.
//!
//! Every page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"u001_generate_form--usecase"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator keeps the entity name searchable: copy the id from the
//! DOM inspector and it leads straight to `usecases/u001_generate_form/`.

/// Use-case page: a single action driven by user input.
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Free-form page exempt from the standard structure.
pub const PAGE_CAT_CUSTOM: &str = "custom";

pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_USECASE, PAGE_CAT_CUSTOM];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && !category.is_empty(),
        None => false,
    }
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

/// Build the standard page id for an entity.
pub fn page_id(entity: &str, category: &str) -> String {
    format!("{entity}--{category}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_page_ids() {
        assert!(is_valid_page_id("u001_generate_form--usecase"));
        assert!(is_valid_page_id(&page_id("u001_generate_form", PAGE_CAT_USECASE)));
    }

    #[test]
    fn test_invalid_page_ids() {
        assert!(!is_valid_page_id("u001_generate_form"));
        assert!(!is_valid_page_id("--usecase"));
        assert!(!is_valid_page_id("u001_generate_form--"));
        assert!(!is_valid_page_id(""));
    }

    #[test]
    fn test_known_categories() {
        assert!(is_known_category("usecase"));
        assert!(is_known_category("custom"));
        assert!(!is_known_category("list"));
    }
}
