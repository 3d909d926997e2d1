/// UseCase metadata for identification and documentation
pub trait UseCaseMetadata {
    /// UseCase index (e.g. "u600")
    fn usecase_index() -> &'static str;

    /// Technical name (e.g. "generate_content")
    fn usecase_name() -> &'static str;

    /// Display name for UI
    fn display_name() -> &'static str;

    /// UseCase description
    fn description() -> &'static str {
        ""
    }

    /// Full name, "u600_generate_content"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
