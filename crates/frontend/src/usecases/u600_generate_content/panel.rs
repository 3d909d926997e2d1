use contracts::domain::a001_study_material::ACCEPT;
use contracts::enums::ContentKind;
use contracts::usecases::u600_generate_content::GenerationResult;
use leptos::prelude::*;
use thaw::*;

use super::view_model::GenerationVm;
use crate::shared::components::FileDropZone;
use crate::shared::format::format_size;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;

/// Shared Upload -> Generate -> Present panel for the AI tool pages.
///
/// Each page owns its own instance; nothing is shared across dialogs.
#[component]
pub fn GenerationPanel(
    kind: ContentKind,
    /// Renders the successful result, per tool
    render_result: Callback<GenerationResult, AnyView>,
) -> impl IntoView {
    let vm = GenerationVm::new(kind);
    let toasts = use_toasts();

    let flow = vm.flow;
    let is_requesting = move || flow.with(|flow| flow.is_requesting());
    let has_artifact = move || flow.with(|flow| flow.artifact().is_some());

    let handle_select = Callback::new(move |file: web_sys::File| {
        vm.select_file(file);
    });

    let handle_generate = move |_| vm.generate(toasts);
    let handle_reset = move |_| vm.reset();

    view! {
        <div
            class="generation-panel"
            style="max-width: 760px; display: flex; flex-direction: column; gap: 16px;"
        >
            <FileDropZone
                accept=ACCEPT
                on_select=handle_select
                disabled=Signal::derive(is_requesting)
            />

            // Selected file chip
            {move || {
                vm.flow.with(|flow| flow.artifact().cloned()).map(|meta| view! {
                    <div
                        class="file-chip"
                        style="display: flex; align-items: center; gap: 8px; padding: 6px 12px; background: var(--colorNeutralBackground2); border: 1px solid var(--colorNeutralStroke2); border-radius: 6px; align-self: flex-start;"
                    >
                        {icon("file-text")}
                        <span>{meta.file_name.clone()}</span>
                        <span style="color: var(--colorNeutralForeground3); font-size: 12px;">
                            {format_size(meta.size_bytes)}
                        </span>
                    </div>
                })
            }}

            <Flex style="gap: 8px;">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || is_requesting() || !has_artifact())
                    on_click=handle_generate
                >
                    {icon("spark")}
                    {move || if is_requesting() { " Generating..." } else { " Generate" }}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(is_requesting)
                    on_click=handle_reset
                >
                    " Start over"
                </Button>
            </Flex>

            // Inline error display
            {move || {
                vm.flow.with(|flow| flow.error().map(|e| e.to_string())).map(|e| view! {
                    <div style="padding: 12px; background: var(--color-error-50); border: 1px solid var(--color-error-100); border-radius: 8px;">
                        <span style="color: var(--color-error);">{e}</span>
                    </div>
                })
            }}

            // Result area, presentation delegated to the tool page
            {move || {
                vm.flow.with(|flow| flow.result().cloned()).map(|result| view! {
                    <div
                        class="generation-result"
                        style="border: 1px solid var(--colorNeutralStroke2); border-radius: 8px; padding: 16px;"
                    >
                        {render_result.run(result)}
                    </div>
                })
            }}
        </div>
    }
}
