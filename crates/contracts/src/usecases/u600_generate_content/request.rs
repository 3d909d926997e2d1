use crate::enums::ContentKind;
use serde::{Deserialize, Serialize};

/// What the UI knows about the file picked for generation.
///
/// The file handle itself never leaves the browser layer; this is the
/// transferable part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactMeta {
    pub file_name: String,
    pub size_bytes: u64,
}

impl ArtifactMeta {
    pub fn new(file_name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            file_name: file_name.into(),
            size_bytes,
        }
    }
}

/// Request accompanying the multipart upload to the generation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub kind: ContentKind,
    pub file_name: String,
    pub size_bytes: u64,
}

impl GenerationRequest {
    pub fn new(kind: ContentKind, artifact: &ArtifactMeta) -> Self {
        Self {
            kind,
            file_name: artifact.file_name.clone(),
            size_bytes: artifact.size_bytes,
        }
    }
}
