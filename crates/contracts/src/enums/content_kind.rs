use serde::{Deserialize, Serialize};

/// Kinds of study content the generation services can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Summary,
    Flashcards,
    Quiz,
    #[serde(rename = "mindmap")]
    MindMap,
    LearningPath,
}

impl ContentKind {
    /// Stable wire token: API path segment and download-file prefix
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Summary => "summary",
            ContentKind::Flashcards => "flashcards",
            ContentKind::Quiz => "quiz",
            ContentKind::MindMap => "mindmap",
            ContentKind::LearningPath => "learning_path",
        }
    }

    /// Human-readable name for UI
    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Summary => "Smart Summary",
            ContentKind::Flashcards => "Flashcards",
            ContentKind::Quiz => "Practice Quiz",
            ContentKind::MindMap => "Mind Map",
            ContentKind::LearningPath => "Learning Path",
        }
    }

    pub fn all() -> Vec<ContentKind> {
        vec![
            ContentKind::Summary,
            ContentKind::Flashcards,
            ContentKind::Quiz,
            ContentKind::MindMap,
            ContentKind::LearningPath,
        ]
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "summary" => Some(ContentKind::Summary),
            "flashcards" => Some(ContentKind::Flashcards),
            "quiz" => Some(ContentKind::Quiz),
            "mindmap" => Some(ContentKind::MindMap),
            "learning_path" => Some(ContentKind::LearningPath),
            _ => None,
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_token_round_trip() {
        for kind in ContentKind::all() {
            assert_eq!(ContentKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(ContentKind::from_str("podcast"), None);
    }

    #[test]
    fn serde_uses_wire_token() {
        let json = serde_json::to_string(&ContentKind::MindMap).unwrap();
        assert_eq!(json, "\"mindmap\"");
        let back: ContentKind = serde_json::from_str("\"learning_path\"").unwrap();
        assert_eq!(back, ContentKind::LearningPath);
    }
}
