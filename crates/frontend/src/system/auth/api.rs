use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo,
};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::api_utils::api_url;

async fn post_json<B: Serialize, R: DeserializeOwned>(path: &str, body: &B) -> Result<R, String> {
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }

    response
        .json::<R>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Login with username and password
pub async fn login(username: String, password: String) -> Result<LoginResponse, String> {
    post_json(
        "/api/system/auth/login",
        &LoginRequest { username, password },
    )
    .await
}

/// Refresh the access token using the refresh token
pub async fn refresh_token(refresh_token: String) -> Result<RefreshResponse, String> {
    post_json("/api/system/auth/refresh", &RefreshRequest { refresh_token }).await
}

/// Logout (revoke refresh token)
pub async fn logout(refresh_token: String) -> Result<(), String> {
    let response = Request::post(&api_url("/api/system/auth/logout"))
        .json(&RefreshRequest { refresh_token })
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Logout failed: {}", response.status()));
    }

    Ok(())
}

/// Get current user info
pub async fn get_current_user(access_token: &str) -> Result<UserInfo, String> {
    let response = Request::get(&api_url("/api/system/auth/me"))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Get current user failed: {}", response.status()));
    }

    response
        .json::<UserInfo>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
