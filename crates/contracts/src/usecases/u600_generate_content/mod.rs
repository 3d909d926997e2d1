pub mod flow;
pub mod request;
pub mod response;

pub use flow::{GenerationFlow, GenerationPhase};
pub use request::{ArtifactMeta, GenerationRequest};
pub use response::GenerationResult;

use crate::usecases::common::UseCaseMetadata;

pub struct GenerateContent;

impl UseCaseMetadata for GenerateContent {
    fn usecase_index() -> &'static str {
        "u600"
    }

    fn usecase_name() -> &'static str {
        "generate_content"
    }

    fn display_name() -> &'static str {
        "Generate study content"
    }

    fn description() -> &'static str {
        "Turn an uploaded file into derived study content (summary, flashcards, quiz, mind map, learning path)"
    }
}
