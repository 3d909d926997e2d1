//! Tab content registry - single source of truth for mapping tab.key -> View
//!
//! All tab keys are resolved in one place; detail tabs encode their subject
//! id in the key suffix.

use crate::dashboards::d100_study_overview::StudyOverviewDashboard;
use crate::domain::a001_study_material::ui::list::MaterialsList;
use crate::domain::a002_study_chat::ui::details::ChatDetails;
use crate::layout::global_context::AppGlobalContext;
use crate::usecases::u601_smart_summary::SmartSummaryPage;
use crate::usecases::u602_flashcards::FlashcardsPage;
use crate::usecases::u603_quiz::QuizPage;
use crate::usecases::u604_mind_map::MindMapPage;
use crate::usecases::u605_learning_path::LearningPathPage;
use leptos::prelude::*;

/// Render the content of a tab by its key.
///
/// # Arguments
/// * `key` - unique tab key (e.g. "u601_smart_summary",
///   "a002_study_chat_<material-id>")
/// * `tabs_store` - context used by detail views to close their own tab
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();

    match key {
        // Dashboards
        "d100_study_overview" => view! { <StudyOverviewDashboard /> }.into_any(),

        // Library
        "a001_study_material" => view! { <MaterialsList /> }.into_any(),

        // AI tools (u601-u605)
        "u601_smart_summary" => view! { <SmartSummaryPage /> }.into_any(),
        "u602_flashcards" => view! { <FlashcardsPage /> }.into_any(),
        "u603_quiz" => view! { <QuizPage /> }.into_any(),
        "u604_mind_map" => view! { <MindMapPage /> }.into_any(),
        "u605_learning_path" => view! { <LearningPathPage /> }.into_any(),

        // Assistant chat, one tab per material
        k if k.starts_with("a002_study_chat_") => {
            let material_id = k.strip_prefix("a002_study_chat_").unwrap().to_string();
            view! {
                <ChatDetails
                    material_id=material_id
                    on_close=Callback::new(move |_| {
                        tabs_store.close_tab(&key_for_close);
                    })
                />
            }
            .into_any()
        }

        _ => view! {
            <div class="tab-placeholder" style="padding: 24px;">
                "Unknown tab: " {key.to_string()}
            </div>
        }
        .into_any(),
    }
}
