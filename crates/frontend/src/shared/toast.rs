//! Transient notifications (toasts)
//!
//! Context service in the same shape as `ModalService`: provided once at the
//! app root, obtained anywhere with `use_toasts()`. Toasts dismiss themselves
//! after a fixed interval.

use leptos::prelude::*;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

/// How long a toast stays on screen
const TOAST_TTL_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: Uuid,
    pub level: ToastLevel,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message.into());
    }

    pub fn dismiss(&self, id: Uuid) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }

    fn push(&self, level: ToastLevel, message: String) {
        let id = Uuid::new_v4();
        self.toasts.update(|toasts| {
            toasts.push(Toast { id, level, message });
        });

        let toasts = self.toasts;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
            toasts.update(|toasts| toasts.retain(|t| t.id != id));
        });
    }
}

/// Hook to access the toast service
pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

/// Fixed overlay rendering the active toasts
#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_toasts();
    let toasts = move || service.toasts.get();

    view! {
        <div
            class="toast-host"
            style="position: fixed; bottom: 20px; right: 20px; display: flex; flex-direction: column; gap: 8px; z-index: 1000;"
        >
            <For each=toasts key=|toast| toast.id let:toast>
                {{
                    let id = toast.id;
                    let is_error = toast.level == ToastLevel::Error;
                    view! {
                        <div
                            class="toast"
                            class:toast--error=is_error
                            style=if is_error {
                                "padding: 10px 14px; border-radius: 8px; background: var(--color-error-50); border: 1px solid var(--color-error-100); color: var(--color-error); display: flex; align-items: center; gap: 10px;"
                            } else {
                                "padding: 10px 14px; border-radius: 8px; background: var(--colorNeutralBackground1); border: 1px solid var(--colorNeutralStroke2); display: flex; align-items: center; gap: 10px;"
                            }
                        >
                            <span>{toast.message.clone()}</span>
                            <button
                                style="background: none; border: none; cursor: pointer; padding: 2px; color: inherit;"
                                on:click=move |_| service.dismiss(id)
                            >
                                "\u{00d7}"
                            </button>
                        </div>
                    }
                }}
            </For>
        </div>
    }
}
