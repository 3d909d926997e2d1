pub mod aggregate;
pub mod reply;
pub mod transcript;

pub use aggregate::{ChatMessage, ChatRole, StudyChat, StudyChatId};
pub use transcript::ChatTranscript;
