use crate::domain::a001_study_material::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::{FileDropZone, PageHeader};
use crate::shared::format::format_size;
use crate::shared::icons::icon;
use crate::shared::modal::{Modal, ModalService};
use crate::shared::toast::use_toasts;
use contracts::domain::a001_study_material::{StudyMaterialListItem, ACCEPT};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Material library: list, upload, and the entry point into assistant chats.
#[component]
pub fn MaterialsList() -> impl IntoView {
    let (materials, set_materials) = signal(Vec::<StudyMaterialListItem>::new());
    let (is_loading, set_is_loading) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (is_uploading, set_is_uploading) = signal(false);

    let modal = use_context::<ModalService>().expect("ModalService not provided in context");
    let toasts = use_toasts();
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let load = move || {
        set_is_loading.set(true);
        spawn_local(async move {
            match api::get_materials().await {
                Ok(items) => {
                    set_materials.set(items);
                    set_error_msg.set(None);
                }
                Err(e) => {
                    set_error_msg.set(Some(e));
                }
            }
            set_is_loading.set(false);
        });
    };

    Effect::new(move |_| load());

    let handle_upload = Callback::new(move |file: web_sys::File| {
        if is_uploading.get() {
            return;
        }
        set_is_uploading.set(true);
        spawn_local(async move {
            match api::upload_material(file).await {
                Ok(item) => {
                    toasts.success(format!("Added \"{}\"", item.description));
                    modal.hide();
                    load();
                }
                Err(e) => {
                    toasts.error(format!("Upload failed: {}", e));
                }
            }
            set_is_uploading.set(false);
        });
    });

    view! {
        <div style="padding: 20px;">
            <PageHeader title="Study materials" subtitle="Everything you have uploaded">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| modal.show()
                >
                    {icon("upload")}
                    " Add material"
                </Button>
            </PageHeader>

            {move || {
                error_msg.get().map(|e| view! {
                    <div style="padding: 12px; margin-bottom: 16px; background: var(--color-error-50); border: 1px solid var(--color-error-100); border-radius: 8px;">
                        <span style="color: var(--color-error);">{e}</span>
                    </div>
                })
            }}

            <table class="data-table" style="width: 100%; border-collapse: collapse;">
                <thead>
                    <tr style="text-align: left; border-bottom: 1px solid var(--colorNeutralStroke2);">
                        <th style="padding: 8px;">"Title"</th>
                        <th style="padding: 8px;">"File"</th>
                        <th style="padding: 8px;">"Format"</th>
                        <th style="padding: 8px;">"Size"</th>
                        <th style="padding: 8px;">"Added"</th>
                        <th style="padding: 8px;"></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || materials.get()
                        key=|item| item.id.clone()
                        let:item
                    >
                        {{
                            let chat_key = format!("a002_study_chat_{}", item.id);
                            let chat_title = item.description.clone();
                            view! {
                                <tr style="border-bottom: 1px solid var(--colorNeutralStroke2);">
                                    <td style="padding: 8px;">{item.description.clone()}</td>
                                    <td style="padding: 8px; color: var(--colorNeutralForeground3);">
                                        {item.file_name.clone()}
                                    </td>
                                    <td style="padding: 8px;">
                                        {item.format.map(|f| f.label()).unwrap_or("\u{2014}")}
                                    </td>
                                    <td style="padding: 8px;">{format_size(item.size_bytes)}</td>
                                    <td style="padding: 8px;">
                                        {item.created_at.format("%d.%m.%Y").to_string()}
                                    </td>
                                    <td style="padding: 8px; text-align: right;">
                                        <Button
                                            appearance=ButtonAppearance::Secondary
                                            on_click=move |_| {
                                                tabs_store.open_tab(&chat_key, &chat_title);
                                            }
                                        >
                                            {icon("chat")}
                                            " Ask assistant"
                                        </Button>
                                    </td>
                                </tr>
                            }
                        }}
                    </For>
                </tbody>
            </table>

            {move || {
                (is_loading.get() && materials.get().is_empty()).then(|| view! {
                    <div style="margin-top: 16px; color: var(--colorNeutralForeground3);">
                        "Loading..."
                    </div>
                })
            }}

            {move || {
                (!is_loading.get() && materials.get().is_empty() && error_msg.get().is_none()).then(|| view! {
                    <div style="margin-top: 16px; color: var(--colorNeutralForeground3);">
                        "No materials yet. Upload your first document to get started."
                    </div>
                })
            }}

            <Modal>
                <div style="padding: 20px; width: 420px; display: flex; flex-direction: column; gap: 16px;">
                    <h2 style="font-size: 16px; font-weight: bold;">"Add a study material"</h2>
                    <FileDropZone
                        accept=ACCEPT
                        on_select=handle_upload
                        disabled=is_uploading
                    />
                    {move || {
                        is_uploading.get().then(|| view! {
                            <div style="color: var(--colorNeutralForeground3);">"Uploading..."</div>
                        })
                    }}
                    <div style="display: flex; justify-content: flex-end;">
                        <Button
                            appearance=ButtonAppearance::Secondary
                            disabled=is_uploading
                            on_click=move |_| modal.hide()
                        >
                            "Cancel"
                        </Button>
                    </div>
                </div>
            </Modal>
        </div>
    }
}
