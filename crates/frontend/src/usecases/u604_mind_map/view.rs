use contracts::enums::ContentKind;
use contracts::usecases::u600_generate_content::GenerationResult;
use leptos::prelude::*;

use crate::shared::components::PageHeader;
use crate::shared::mindmap::MindMapViewer;
use crate::usecases::u600_generate_content::GenerationPanel;

#[component]
pub fn MindMapPage() -> impl IntoView {
    let render_result = Callback::new(|result: GenerationResult| {
        view! { <MindMapViewer content=result.content.clone() /> }.into_any()
    });

    view! {
        <div style="padding: 20px;">
            <PageHeader
                title="Mind Map"
                subtitle="See a document as a collapsible concept tree"
            >
                <></>
            </PageHeader>
            <GenerationPanel kind=ContentKind::MindMap render_result=render_result />
        </div>
    }
}
