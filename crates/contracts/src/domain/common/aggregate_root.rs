use super::{EntityMetadata, Origin};

/// Trait for an aggregate root
///
/// Instance accessors plus the static metadata every aggregate class declares.
pub trait AggregateRoot {
    /// Identifier type of the aggregate
    type Id;

    // Instance data

    fn id(&self) -> Self::Id;

    fn code(&self) -> &str;

    fn description(&self) -> &str;

    fn metadata(&self) -> &EntityMetadata;

    fn metadata_mut(&mut self) -> &mut EntityMetadata;

    // Class metadata

    /// Aggregate index in the system (e.g. "a001")
    fn aggregate_index() -> &'static str;

    /// Collection name used by the backend (e.g. "study_material")
    fn collection_name() -> &'static str;

    /// Singular display name for UI
    fn element_name() -> &'static str;

    /// Plural display name for UI
    fn list_name() -> &'static str;

    /// Data source of the aggregate
    fn origin() -> Origin;
}
