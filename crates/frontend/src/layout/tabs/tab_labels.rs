//! Tab labels - single source of truth for tab titles.
//!
//! Aggregate tabs take `list_name` from contracts; tool and dashboard tabs
//! are hardcoded here. Fallback: the key itself.

use contracts::domain::a001_study_material::StudyMaterial;
use contracts::domain::common::AggregateRoot;

/// Readable tab title for the given key.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        // Aggregates
        "a001_study_material" => StudyMaterial::list_name(),

        // Dashboards
        "d100_study_overview" => "Overview",

        // AI tools
        "u601_smart_summary" => "Smart Summary",
        "u602_flashcards" => "Flashcards",
        "u603_quiz" => "Practice Quiz",
        "u604_mind_map" => "Mind Map",
        "u605_learning_path" => "Learning Path",

        _ => "Untitled",
    }
}
