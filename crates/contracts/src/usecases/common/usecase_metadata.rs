/// Identification and display metadata of a UseCase
pub trait UseCaseMetadata {
    /// UseCase index, e.g. "u501"
    fn usecase_index() -> &'static str;

    /// Technical name, e.g. "upload_documents"
    fn usecase_name() -> &'static str;

    /// Title shown in the UI
    fn display_name() -> &'static str;

    /// One-line hint shown under the title
    fn description() -> &'static str {
        ""
    }

    /// Backend path the UseCase posts to
    fn endpoint() -> &'static str;

    /// Full name like "u501_upload_documents"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
