use contracts::enums::ContentKind;
use contracts::usecases::u600_generate_content::GenerationResult;
use leptos::prelude::*;

use crate::shared::components::{PageHeader, ResultActions};
use crate::usecases::u600_generate_content::GenerationPanel;

#[component]
pub fn SmartSummaryPage() -> impl IntoView {
    let render_result = Callback::new(|result: GenerationResult| {
        view! {
            <div style="display: flex; flex-direction: column; gap: 12px;">
                <ResultActions result=result.clone() />
                <div style="white-space: pre-wrap; line-height: 1.6;">{result.content.clone()}</div>
            </div>
        }
        .into_any()
    });

    view! {
        <div style="padding: 20px;">
            <PageHeader
                title="Smart Summary"
                subtitle="Turn a document into a concise summary"
            >
                <></>
            </PageHeader>
            <GenerationPanel kind=ContentKind::Summary render_result=render_result />
        </div>
    }
}
