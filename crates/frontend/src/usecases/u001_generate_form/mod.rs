//! Generate Form UseCase (MVVM)
//!
//! - api.rs: the generation action
//! - view_model.rs: GenerateFormVm with RwSignals and the submit flow
//! - view.rs: GenerateFormPage component

mod api;
mod view;
mod view_model;

pub use view::GenerateFormPage;
pub use view_model::{GenerateFormVm, GENERATE_FAILED_MESSAGE};
