use serde::{Deserialize, Serialize};

/// Where an aggregate's data comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
    /// Uploaded by the user (study materials)
    Upload,
    /// Produced by a generation service
    Generated,
    /// Created inside the application itself
    #[serde(rename = "self")]
    Self_,
}

impl Origin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::Upload => "upload",
            Origin::Generated => "generated",
            Origin::Self_ => "self",
        }
    }
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
