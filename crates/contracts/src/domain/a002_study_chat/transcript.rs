use super::aggregate::{ChatMessage, ChatRole, StudyChatId};
use uuid::Uuid;

/// Ordered, append-only transcript of one conversation.
///
/// Turns are only ever appended; there is no edit or delete API. History is
/// bounded by the owning widget's lifetime, nothing is persisted.
#[derive(Debug, Clone)]
pub struct ChatTranscript {
    chat_id: StudyChatId,
    messages: Vec<ChatMessage>,
}

impl ChatTranscript {
    pub fn new(chat_id: StudyChatId) -> Self {
        Self {
            chat_id,
            messages: Vec::new(),
        }
    }

    pub fn chat_id(&self) -> StudyChatId {
        self.chat_id
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Append a user turn, returning its id
    pub fn push_user(&mut self, content: impl Into<String>) -> Uuid {
        self.push(ChatMessage::user(self.chat_id, content))
    }

    /// Append an assistant turn, returning its id
    pub fn push_assistant(&mut self, content: impl Into<String>) -> Uuid {
        self.push(ChatMessage::assistant(self.chat_id, content))
    }

    fn push(&mut self, message: ChatMessage) -> Uuid {
        let id = message.id;
        self.messages.push(message);
        id
    }

    /// Count of turns with the given role
    pub fn count_role(&self, role: ChatRole) -> usize {
        self.messages.iter().filter(|m| m.role == role).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_appends_exactly_one_user_turn() {
        let mut transcript = ChatTranscript::new(StudyChatId::new_v4());
        transcript.push_user("hello");

        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.count_role(ChatRole::User), 1);
        assert_eq!(transcript.messages()[0].content, "hello");
    }

    #[test]
    fn order_is_append_order() {
        let mut transcript = ChatTranscript::new(StudyChatId::new_v4());
        transcript.push_user("first");
        transcript.push_assistant("second");
        transcript.push_user("third");

        let contents: Vec<&str> = transcript
            .messages()
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(contents, vec!["first", "second", "third"]);
    }

    #[test]
    fn turns_keep_their_ids() {
        let mut transcript = ChatTranscript::new(StudyChatId::new_v4());
        let id = transcript.push_user("hello");
        assert_eq!(transcript.messages()[0].id, id);
    }
}
