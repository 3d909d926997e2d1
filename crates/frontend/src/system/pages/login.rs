use crate::system::auth::context::{do_login, use_auth};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    let (_, set_auth_state) = use_auth();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (is_submitting, set_is_submitting) = signal(false);

    let submit = move || {
        if is_submitting.get() {
            return;
        }
        let user = username.get();
        let pass = password.get();
        if user.trim().is_empty() || pass.is_empty() {
            set_error_msg.set(Some("Enter your username and password".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        spawn_local(async move {
            if let Err(e) = do_login(set_auth_state, user, pass).await {
                set_error_msg.set(Some(e));
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div
            class="login-page"
            style="height: 100vh; display: flex; align-items: center; justify-content: center;"
        >
            <div
                class="login-card"
                style="width: 360px; padding: 28px; border: 1px solid var(--colorNeutralStroke2); border-radius: 12px; background: var(--colorNeutralBackground1);"
            >
                <h1 style="font-size: 20px; font-weight: bold; margin-bottom: 4px;">"StudyDesk"</h1>
                <div style="color: var(--colorNeutralForeground3); margin-bottom: 20px;">
                    "Sign in to your study workspace"
                </div>

                <div style="margin-bottom: 12px;">
                    <label style="display: block; margin-bottom: 6px;">"Username"</label>
                    <input
                        type="text"
                        style="width: 100%; padding: 8px; border: 1px solid var(--colorNeutralStroke2); border-radius: 6px;"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                        prop:disabled=move || is_submitting.get()
                    />
                </div>

                <div style="margin-bottom: 16px;">
                    <label style="display: block; margin-bottom: 6px;">"Password"</label>
                    <input
                        type="password"
                        style="width: 100%; padding: 8px; border: 1px solid var(--colorNeutralStroke2); border-radius: 6px;"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                submit();
                            }
                        }
                        prop:disabled=move || is_submitting.get()
                    />
                </div>

                {move || {
                    error_msg
                        .get()
                        .map(|e| {
                            view! {
                                <div style="padding: 10px; margin-bottom: 12px; background: var(--color-error-50); border: 1px solid var(--color-error-100); border-radius: 6px; color: var(--color-error);">
                                    {e}
                                </div>
                            }
                        })
                }}

                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=is_submitting
                    on_click=move |_| submit()
                >
                    {move || if is_submitting.get() { "Signing in..." } else { "Sign in" }}
                </Button>
            </div>
        </div>
    }
}
