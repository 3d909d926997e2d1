use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, Origin};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ID type for the StudyMaterial aggregate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudyMaterialId(pub Uuid);

impl StudyMaterialId {
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

impl AggregateId for StudyMaterialId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(StudyMaterialId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// File formats the library accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialFormat {
    Pdf,
    Docx,
    PlainText,
    Png,
    Jpeg,
}

/// Value for the file picker's `accept` attribute. The browser input is the
/// only type filter; the backend does not enforce one.
pub const ACCEPT: &str = ".pdf,.docx,.txt,.png,.jpg,.jpeg";

impl MaterialFormat {
    /// Sniff the format from the file name extension (case-insensitive)
    pub fn from_file_name(name: &str) -> Option<Self> {
        let ext = name.rsplit_once('.').map(|(_, e)| e.to_ascii_lowercase())?;
        match ext.as_str() {
            "pdf" => Some(MaterialFormat::Pdf),
            "docx" => Some(MaterialFormat::Docx),
            "txt" => Some(MaterialFormat::PlainText),
            "png" => Some(MaterialFormat::Png),
            "jpg" | "jpeg" => Some(MaterialFormat::Jpeg),
            _ => None,
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            MaterialFormat::Pdf => "application/pdf",
            MaterialFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            MaterialFormat::PlainText => "text/plain",
            MaterialFormat::Png => "image/png",
            MaterialFormat::Jpeg => "image/jpeg",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MaterialFormat::Pdf => "PDF",
            MaterialFormat::Docx => "DOCX",
            MaterialFormat::PlainText => "TXT",
            MaterialFormat::Png => "PNG",
            MaterialFormat::Jpeg => "JPEG",
        }
    }
}

/// StudyMaterial aggregate: one uploaded document or image
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyMaterial {
    #[serde(flatten)]
    pub base: BaseAggregate<StudyMaterialId>,
    pub file_name: String,
    pub format: Option<MaterialFormat>,
    pub size_bytes: u64,
}

impl StudyMaterial {
    /// Create a new material for insertion
    pub fn new_for_insert(code: String, description: String, file_name: String, size_bytes: u64) -> Self {
        let format = MaterialFormat::from_file_name(&file_name);
        let base = BaseAggregate::new(StudyMaterialId::new_v4(), code, description);
        Self {
            base,
            file_name,
            format,
            size_bytes,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Title must not be empty".into());
        }
        if self.file_name.trim().is_empty() {
            return Err("File name must not be empty".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for StudyMaterial {
    type Id = StudyMaterialId;

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
        "a001"
    }

    fn collection_name() -> &'static str {
        "study_material"
    }

    fn element_name() -> &'static str {
        "Study material"
    }

    fn list_name() -> &'static str {
        "Study materials"
    }

    fn origin() -> Origin {
        Origin::Upload
    }
}

/// DTO for the material list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyMaterialListItem {
    pub id: String,
    pub code: String,
    pub description: String,
    pub file_name: String,
    pub format: Option<MaterialFormat>,
    pub size_bytes: u64,
    pub created_at: DateTime<Utc>,
}

impl From<StudyMaterial> for StudyMaterialListItem {
    fn from(material: StudyMaterial) -> Self {
        Self {
            id: material.base.id.as_string(),
            code: material.base.code,
            description: material.base.description,
            file_name: material.file_name,
            format: material.format,
            size_bytes: material.size_bytes,
            created_at: material.base.metadata.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_sniffing_is_case_insensitive() {
        assert_eq!(
            MaterialFormat::from_file_name("Notes.PDF"),
            Some(MaterialFormat::Pdf)
        );
        assert_eq!(
            MaterialFormat::from_file_name("scan.JPEG"),
            Some(MaterialFormat::Jpeg)
        );
        assert_eq!(MaterialFormat::from_file_name("archive.zip"), None);
        assert_eq!(MaterialFormat::from_file_name("no_extension"), None);
    }

    #[test]
    fn validate_rejects_blank_fields() {
        let mut material = StudyMaterial::new_for_insert(
            "MAT-001".into(),
            "Biology notes".into(),
            "notes.pdf".into(),
            1024,
        );
        assert!(material.validate().is_ok());
        assert_eq!(material.format, Some(MaterialFormat::Pdf));

        material.base.description = "   ".into();
        assert!(material.validate().is_err());
    }
}
