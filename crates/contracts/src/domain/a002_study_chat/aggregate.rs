use crate::domain::a001_study_material::StudyMaterialId;
use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, Origin};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ID type for the StudyChat aggregate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudyChatId(pub Uuid);

impl StudyChatId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for StudyChatId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(StudyChatId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Role of a chat turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

/// StudyChat aggregate: one assistant conversation bound to a material
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyChat {
    #[serde(flatten)]
    pub base: BaseAggregate<StudyChatId>,
    pub material_id: StudyMaterialId,
}

impl StudyChat {
    pub fn new_for_insert(code: String, description: String, material_id: StudyMaterialId) -> Self {
        let base = BaseAggregate::new(StudyChatId::new_v4(), code, description);
        Self { base, material_id }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Chat title must not be empty".into());
        }
        Ok(())
    }
}

impl AggregateRoot for StudyChat {
    type Id = StudyChatId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "study_chat"
    }

    fn element_name() -> &'static str {
        "Assistant chat"
    }

    fn list_name() -> &'static str {
        "Assistant chats"
    }

    fn origin() -> Origin {
        Origin::Self_
    }
}

/// One turn of the conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub chat_id: StudyChatId,
    pub role: ChatRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(chat_id: StudyChatId, role: ChatRole, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            chat_id,
            role,
            content,
            created_at: Utc::now(),
        }
    }

    pub fn user(chat_id: StudyChatId, content: impl Into<String>) -> Self {
        Self::new(chat_id, ChatRole::User, content.into())
    }

    pub fn assistant(chat_id: StudyChatId, content: impl Into<String>) -> Self {
        Self::new(chat_id, ChatRole::Assistant, content.into())
    }
}
