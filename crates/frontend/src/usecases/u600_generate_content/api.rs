//! Generation Service facade
//!
//! One function per content kind, all delegating to a shared multipart POST.
//! Failures carry a human-readable message: the response body when the
//! server provides one, otherwise the HTTP status. Callers catch and present
//! it; nothing here retries.

use crate::shared::api_utils::api_base;
use contracts::enums::ContentKind;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u600_generate_content::{
    ArtifactMeta, GenerateContent, GenerationRequest, GenerationResult,
};

pub async fn generate_summary(file: web_sys::File) -> Result<GenerationResult, String> {
    generate(&request_for(ContentKind::Summary, &file), file).await
}

pub async fn generate_flashcards(file: web_sys::File) -> Result<GenerationResult, String> {
    generate(&request_for(ContentKind::Flashcards, &file), file).await
}

pub async fn generate_quiz(file: web_sys::File) -> Result<GenerationResult, String> {
    generate(&request_for(ContentKind::Quiz, &file), file).await
}

pub async fn generate_mind_map(file: web_sys::File) -> Result<GenerationResult, String> {
    generate(&request_for(ContentKind::MindMap, &file), file).await
}

pub async fn generate_learning_path(file: web_sys::File) -> Result<GenerationResult, String> {
    generate(&request_for(ContentKind::LearningPath, &file), file).await
}

fn request_for(kind: ContentKind, file: &web_sys::File) -> GenerationRequest {
    GenerationRequest::new(kind, &ArtifactMeta::new(file.name(), file.size() as u64))
}

/// Upload the artifact and wait for the generated content
pub async fn generate(
    request: &GenerationRequest,
    file: web_sys::File,
) -> Result<GenerationResult, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

    let form_data = FormData::new().map_err(|e| format!("{e:?}"))?;
    form_data
        .append_with_blob("file", &file)
        .map_err(|e| format!("{e:?}"))?;
    let meta = serde_json::to_string(request).map_err(|e| format!("{e}"))?;
    form_data
        .append_with_str("request", &meta)
        .map_err(|e| format!("{e:?}"))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form_data);

    let url = format!(
        "{}/api/{}/generate/{}",
        api_base(),
        GenerateContent::usecase_index(),
        request.kind.as_str()
    );
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;

    if !resp.ok() {
        // Surface the server's message verbatim when it sends one
        let message = text.trim();
        if message.is_empty() {
            return Err(format!("HTTP {}", resp.status()));
        }
        return Err(message.to_string());
    }

    let data: GenerationResult = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;
    Ok(data)
}
