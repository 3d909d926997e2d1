use contracts::enums::ContentKind;
use contracts::usecases::u600_generate_content::GenerationResult;
use leptos::prelude::*;

use crate::shared::components::{PageHeader, ResultActions};
use crate::usecases::u600_generate_content::GenerationPanel;

#[component]
pub fn LearningPathPage() -> impl IntoView {
    let render_result = Callback::new(|result: GenerationResult| {
        let steps: Vec<String> = result
            .content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();

        view! {
            <div style="display: flex; flex-direction: column; gap: 12px;">
                <ResultActions result=result.clone() />
                <div style="display: flex; flex-direction: column; gap: 8px;">
                    {steps.into_iter().enumerate().map(|(i, step)| view! {
                        <div style="display: flex; gap: 12px; align-items: baseline;">
                            <span style="font-weight: bold; color: var(--colorNeutralForeground3); min-width: 24px;">
                                {format!("{}.", i + 1)}
                            </span>
                            <span>{step}</span>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        }
        .into_any()
    });

    view! {
        <div style="padding: 20px;">
            <PageHeader
                title="Learning Path"
                subtitle="Get an ordered plan for working through a document"
            >
                <></>
            </PageHeader>
            <GenerationPanel kind=ContentKind::LearningPath render_result=render_result />
        </div>
    }
}
