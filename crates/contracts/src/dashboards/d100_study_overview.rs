use crate::enums::ContentKind;
use serde::{Deserialize, Serialize};

/// Counts shown on the overview dashboard. Computed by the backend; the
/// client renders them read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyOverviewResponse {
    pub materials: i64,
    pub chats: i64,
    pub generated_artifacts: i64,
    /// Activity-log entries over the trailing week
    pub activity_events: i64,
    pub artifacts_by_kind: Vec<KindCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KindCount {
    pub kind: ContentKind,
    pub count: i64,
}
