//! Document-level metadata for the application shell.

use serde::{Deserialize, Serialize};

/// Values the root layout writes into the HTML document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppMetadata {
    pub title: String,
    pub description: String,
    /// Value of the `lang` attribute on `<html>`
    pub lang: String,
}

pub const APP_TITLE: &str = "Dynamic Form Generator";
pub const APP_DESCRIPTION: &str = "AI-powered dynamic form generator";
pub const APP_LANG: &str = "en";

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            title: APP_TITLE.to_string(),
            description: APP_DESCRIPTION.to_string(),
            lang: APP_LANG.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_metadata() {
        let meta = AppMetadata::default();
        assert_eq!(meta.title, "Dynamic Form Generator");
        assert_eq!(meta.description, "AI-powered dynamic form generator");
        assert_eq!(meta.lang, "en");
    }
}
