use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

/// Auth context provider component.
///
/// Restores the session from localStorage on mount: validates the stored
/// access token, falls back to the refresh token, clears both when neither
/// works.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    Effect::new(move |_| {
        spawn_local(async move {
            let Some(access_token) = storage::get_access_token() else {
                return;
            };

            match api::get_current_user(&access_token).await {
                Ok(user_info) => {
                    set_auth_state.set(AuthState {
                        access_token: Some(access_token),
                        user_info: Some(user_info),
                    });
                }
                Err(_) => {
                    // Stored token invalid, try the refresh token
                    let Some(refresh_token) = storage::get_refresh_token() else {
                        storage::clear_tokens();
                        return;
                    };
                    match api::refresh_token(refresh_token).await {
                        Ok(response) => {
                            storage::save_access_token(&response.access_token);
                            if let Ok(user_info) =
                                api::get_current_user(&response.access_token).await
                            {
                                set_auth_state.set(AuthState {
                                    access_token: Some(response.access_token),
                                    user_info: Some(user_info),
                                });
                            }
                        }
                        Err(_) => {
                            storage::clear_tokens();
                        }
                    }
                }
            }
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Perform login and store the session
pub async fn do_login(
    set_auth_state: WriteSignal<AuthState>,
    username: String,
    password: String,
) -> Result<(), String> {
    let response = api::login(username, password).await?;

    storage::save_access_token(&response.access_token);
    storage::save_refresh_token(&response.refresh_token);

    set_auth_state.set(AuthState {
        access_token: Some(response.access_token),
        user_info: Some(response.user),
    });

    Ok(())
}

/// Perform logout and clear the session
pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) -> Result<(), String> {
    if let Some(refresh_token) = storage::get_refresh_token() {
        let _ = api::logout(refresh_token).await;
    }

    storage::clear_tokens();
    set_auth_state.set(AuthState::default());

    Ok(())
}
