/// Identification of a UseCase for routing, page ids and headings
pub trait UseCaseMetadata {
    /// Short index, e.g. "u001"
    fn usecase_index() -> &'static str;

    /// Technical name, e.g. "generate_form"
    fn usecase_name() -> &'static str;

    /// Heading shown in the UI
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// Full name of the form "u001_generate_form"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
