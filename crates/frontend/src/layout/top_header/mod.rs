//! TopHeader component - application top bar.
//!
//! Sidebar toggle, product name, current user, logout.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let (auth_state, set_auth_state) = use_auth();

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let logout = move |_| {
        spawn_local(async move {
            let _ = do_logout(set_auth_state).await;
        });
    };

    let user_name = move || {
        auth_state
            .get()
            .user_info
            .map(|u| u.display_name.unwrap_or(u.username))
            .unwrap_or_default()
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title="Toggle navigation"
                >
                    {icon("panel-left")}
                </button>
                <span class="top-header__title">"StudyDesk"</span>
            </div>

            <div class="top-header__actions">
                <span class="top-header__user">
                    {icon("user")}
                    " "
                    {user_name}
                </span>
                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("logout")}
                </button>
            </div>
        </div>
    }
}
