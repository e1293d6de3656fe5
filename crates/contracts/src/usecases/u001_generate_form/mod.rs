pub mod request;

pub use request::GenerateFormRequest;

use crate::usecases::common::UseCaseMetadata;

pub struct GenerateForm;

impl UseCaseMetadata for GenerateForm {
    fn usecase_index() -> &'static str {
        "u001"
    }

    fn usecase_name() -> &'static str {
        "generate_form"
    }

    fn display_name() -> &'static str {
        "Dynamic Form Generator"
    }

    fn description() -> &'static str {
        "Describe a form in plain English and watch it come to life with AI"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        assert_eq!(GenerateForm::full_name(), "u001_generate_form");
    }
}
