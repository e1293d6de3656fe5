//! Generate Form - View Model

use contracts::usecases::u001_generate_form::GenerateFormRequest;
use leptos::prelude::*;
use std::future::Future;

/// The only error text the page ever shows.
pub const GENERATE_FAILED_MESSAGE: &str = "Failed to generate form";

#[derive(Clone, Copy)]
pub struct GenerateFormVm {
    pub prompt: RwSignal<String>,
    pub is_generating: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl GenerateFormVm {
    pub fn new() -> Self {
        Self {
            prompt: RwSignal::new(String::new()),
            is_generating: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Submit handler: `idle -> submitting -> idle`.
    ///
    /// A blank prompt leaves every signal untouched. Otherwise the error is
    /// cleared, `generate` is awaited and `is_generating` is reset when this
    /// future completes or is dropped.
    pub async fn submit<F, Fut>(self, generate: F)
    where
        F: FnOnce(GenerateFormRequest) -> Fut,
        Fut: Future<Output = Result<(), String>>,
    {
        if self.is_generating.get_untracked() {
            return;
        }
        let Some(request) = GenerateFormRequest::from_prompt(&self.prompt.get_untracked()) else {
            return;
        };

        let _generating = GeneratingGuard::start(self.is_generating);
        self.error.set(None);

        if let Err(e) = generate(request).await {
            log::error!("u001: form generation failed: {e}");
            self.error.set(Some(GENERATE_FAILED_MESSAGE.to_string()));
        }
    }
}

impl Default for GenerateFormVm {
    fn default() -> Self {
        Self::new()
    }
}

/// Holds `is_generating` at `true` until dropped.
struct GeneratingGuard(RwSignal<bool>);

impl GeneratingGuard {
    fn start(flag: RwSignal<bool>) -> Self {
        flag.set(true);
        Self(flag)
    }
}

impl Drop for GeneratingGuard {
    fn drop(&mut self) {
        // the page may already be unmounted
        let _ = self.0.try_set(false);
    }
}
