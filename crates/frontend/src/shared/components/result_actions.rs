use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::download::{artifact_file_name, download_text_file};
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;
use contracts::usecases::u600_generate_content::GenerationResult;
use leptos::prelude::*;
use thaw::*;

/// Copy / download toolbar for a text result
#[component]
pub fn ResultActions(result: GenerationResult) -> impl IntoView {
    let toasts = use_toasts();

    let content_for_copy = result.content.clone();
    let handle_copy = move |_| {
        let toasts = toasts;
        copy_to_clipboard_with_callback(&content_for_copy, move || {
            toasts.success("Copied to clipboard");
        });
    };

    let file_name = artifact_file_name(result.kind, &result.source_file_name);
    let content_for_download = result.content.clone();
    let handle_download = move |_| {
        match download_text_file(&content_for_download, &file_name) {
            Ok(()) => toasts.success(format!("Saved {}", file_name)),
            Err(e) => {
                log::error!("Download failed: {}", e);
                toasts.error("Download failed");
            }
        }
    };

    view! {
        <Flex style="gap: 8px;">
            <Button appearance=ButtonAppearance::Secondary on_click=handle_copy>
                {icon("copy")}
                " Copy"
            </Button>
            <Button appearance=ButtonAppearance::Secondary on_click=handle_download>
                {icon("download")}
                " Download .txt"
            </Button>
        </Flex>
    }
}
