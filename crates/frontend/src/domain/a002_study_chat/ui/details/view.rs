//! Assistant Chat Details - View Component

use super::model;
use super::view_model::ChatDetailsVm;
use crate::domain::a001_study_material::api as material_api;
use crate::shared::icons::icon;
use contracts::domain::a001_study_material::StudyMaterialId;
use contracts::domain::a002_study_chat::{ChatRole, ChatTranscript, StudyChat};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use thaw::*;

/// Assistant chat for one material. The transcript is append-only and lives
/// only as long as this component.
#[component]
#[allow(non_snake_case)]
pub fn ChatDetails(material_id: String, on_close: Callback<()>) -> impl IntoView {
    let vm = ChatDetailsVm::new();
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();

    // Scroll to bottom helper
    let scroll_to_bottom = {
        let messages_container_ref = messages_container_ref.clone();
        move || {
            if let Some(container) = messages_container_ref.get() {
                request_animation_frame(move || {
                    container.set_scroll_top(container.scroll_height());
                });
            }
        }
    };

    // Load the material this chat is about
    Effect::new({
        let material_id = material_id.clone();
        move |_| {
            let material_id = material_id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match material_api::get_material(&material_id).await {
                    Ok(material) => {
                        // Session-local chat record; the transcript is keyed
                        // by its id and discarded with the component.
                        if let Ok(mat_id) = StudyMaterialId::from_string(&material.id) {
                            let chat = StudyChat::new_for_insert(
                                format!("CHT-{}", material.code),
                                material.description.clone(),
                                mat_id,
                            );
                            vm.transcript.set(ChatTranscript::new(chat.base.id));
                            vm.chat.set(Some(chat));
                        }
                        vm.material.set(Some(material));
                        vm.error.set(None);
                    }
                    Err(e) => vm.error.set(Some(e)),
                }
            });
        }
    });

    // Send handler: append the user turn immediately, mark the assistant as
    // typing, append the templated reply after the simulated delay.
    let handle_send = Callback::new({
        let scroll_to_bottom = scroll_to_bottom.clone();
        move |_| {
            let content = vm.draft.get();
            if content.trim().is_empty() || vm.is_typing.get() {
                return;
            }

            vm.draft.set(String::new());
            vm.transcript.update(|transcript| {
                transcript.push_user(content.clone());
            });
            vm.is_typing.set(true);
            scroll_to_bottom();

            let scroll_to_bottom = scroll_to_bottom.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let title = vm
                    .material
                    .get_untracked()
                    .map(|m| m.description)
                    .unwrap_or_else(|| "this material".to_string());

                let reply = model::simulated_response(&title, &content).await;

                vm.transcript.update(|transcript| {
                    transcript.push_assistant(reply);
                });
                vm.is_typing.set(false);
                scroll_to_bottom();
            });
        }
    });

    view! {
        <div style="height: 100%; display: flex; flex-direction: column; padding: 20px;">
            // Header
            <Flex
                justify=FlexJustify::SpaceBetween
                align=FlexAlign::Center
                style="margin-bottom: 16px; padding-bottom: 12px; border-bottom: 1px solid var(--colorNeutralStroke2);"
            >
                <Flex align=FlexAlign::Center style="gap: 16px;">
                    <h2 style="font-size: 18px; font-weight: bold;">
                        {move || {
                            vm.material
                                .get()
                                .map(|m| m.description.clone())
                                .unwrap_or_else(|| "Loading...".to_string())
                        }}
                    </h2>
                    <span style="color: var(--colorNeutralForeground3); font-size: 14px;">
                        {move || {
                            vm.material
                                .get()
                                .map(|m| m.file_name.clone())
                                .unwrap_or_default()
                        }}
                    </span>
                    <span style="color: var(--colorNeutralForeground3); font-size: 14px;">
                        {move || {
                            vm.chat
                                .get()
                                .map(|c| c.base.code.clone())
                                .unwrap_or_default()
                        }}
                    </span>
                    <span style="color: var(--colorNeutralForeground3); font-size: 14px;">
                        {move || format!("Turns: {}", vm.transcript.get().len())}
                    </span>
                </Flex>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_close.run(())
                >
                    {icon("close")}
                    " Close"
                </Button>
            </Flex>

            // Error display
            {move || {
                vm.error
                    .get()
                    .map(|e| {
                        view! {
                            <div style="padding: 12px; margin-bottom: 16px; background: var(--color-error-50); border: 1px solid var(--color-error-100); border-radius: 8px;">
                                <span style="color: var(--color-error);">{e}</span>
                            </div>
                        }
                    })
            }}

            // Messages area
            <div
                node_ref=messages_container_ref
                style="flex: 1; overflow-y: auto; display: flex; flex-direction: column; gap: 12px; margin-bottom: 16px; padding: 12px; background: var(--colorNeutralBackground1); border: 1px solid var(--colorNeutralStroke2); border-radius: 8px;"
            >
                <For
                    each=move || vm.transcript.get().messages().to_vec()
                    key=|msg| msg.id
                    let:msg
                >
                    {{
                        let is_user = msg.role == ChatRole::User;
                        let time = msg.created_at.format("%H:%M").to_string();
                        view! {
                            <div
                                style=if is_user {
                                    "align-self: flex-end; max-width: 70%;"
                                } else {
                                    "align-self: flex-start; max-width: 70%;"
                                }
                            >
                                <div
                                    style=if is_user {
                                        "background: var(--colorBrandBackground2); padding: 10px 14px; border-radius: 12px;"
                                    } else {
                                        "background: var(--colorNeutralBackground2); padding: 10px 14px; border-radius: 12px;"
                                    }
                                >
                                    <div style="white-space: pre-wrap;">{msg.content.clone()}</div>
                                    <div style="font-size: 11px; opacity: 0.7; margin-top: 6px;">
                                        {time}
                                    </div>
                                </div>
                            </div>
                        }
                    }}
                </For>

                {move || {
                    vm.is_typing.get().then(|| view! {
                        <div style="align-self: flex-start; color: var(--colorNeutralForeground3); font-size: 13px;">
                            "Assistant is typing..."
                        </div>
                    })
                }}
            </div>

            // Input area
            <Flex style="gap: 8px; align-items: flex-end;">
                <div style="flex: 1;">
                    <Textarea
                        value=vm.draft
                        placeholder="Ask about this material... (Ctrl+Enter to send)"
                        attr:style="width: 100%; min-height: 60px; max-height: 160px; resize: vertical;"
                        disabled=vm.is_typing
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" && ev.ctrl_key() {
                                ev.prevent_default();
                                handle_send.run(());
                            }
                        }
                    />
                </div>

                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=vm.is_typing
                    on_click=move |_| handle_send.run(())
                >
                    {icon("send")}
                    {move || if vm.is_typing.get() { " Waiting..." } else { " Send" }}
                </Button>
            </Flex>
        </div>
    }
}
