use crate::enums::ContentKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Generated study content as returned by the generation service.
///
/// Content is plain text for every kind; the mind-map kind carries an outline
/// or a line-indented pseudo-graph the viewer converts before drawing.
/// Results live only as long as the dialog that requested them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub kind: ContentKind,
    /// Name of the uploaded file the content was derived from
    pub source_file_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
