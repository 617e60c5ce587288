pub mod request;
pub mod response;

pub use request::SearchRequest;
pub use response::{SearchResponse, SearchResultRow};

use crate::usecases::common::UseCaseMetadata;

pub struct AskQuestion;

impl UseCaseMetadata for AskQuestion {
    fn usecase_index() -> &'static str {
        "u502"
    }

    fn usecase_name() -> &'static str {
        "ask_question"
    }

    fn display_name() -> &'static str {
        "Ask a Question"
    }

    fn description() -> &'static str {
        "Ask any question about your uploaded documents in natural language"
    }

    fn endpoint() -> &'static str {
        "/search/"
    }
}
