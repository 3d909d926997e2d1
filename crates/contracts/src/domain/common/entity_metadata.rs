use serde::{Deserialize, Serialize};

/// Lifecycle metadata carried by every aggregate instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityMetadata {
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    /// Soft delete
    pub is_deleted: bool,
    /// Version for optimistic locking
    pub version: i32,
}

impl EntityMetadata {
    pub fn new() -> Self {
        let now = chrono::Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            is_deleted: false,
            version: 0,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now();
    }

    pub fn increment_version(&mut self) {
        self.version += 1;
    }
}

impl Default for EntityMetadata {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touch_moves_updated_at_forward() {
        let mut metadata = EntityMetadata::new();
        let created = metadata.created_at;
        let before = metadata.updated_at;
        metadata.touch();
        assert!(metadata.updated_at >= before);
        assert_eq!(metadata.created_at, created);
    }

    #[test]
    fn version_starts_at_zero_and_increments() {
        let mut metadata = EntityMetadata::new();
        assert_eq!(metadata.version, 0);
        metadata.increment_version();
        metadata.increment_version();
        assert_eq!(metadata.version, 2);
    }
}
