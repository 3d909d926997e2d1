use contracts::enums::ContentKind;
use contracts::usecases::u600_generate_content::{ArtifactMeta, GenerationFlow};
use leptos::prelude::*;

use super::api;
use crate::shared::toast::ToastService;

/// Reactive wrapper around the generation state machine.
///
/// The state machine itself lives in contracts; this holds it in a signal
/// and keeps the non-Send file handle next to it.
#[derive(Clone, Copy)]
pub struct GenerationVm {
    pub flow: RwSignal<GenerationFlow>,
    file: StoredValue<Option<web_sys::File>, LocalStorage>,
}

impl GenerationVm {
    pub fn new(kind: ContentKind) -> Self {
        Self {
            flow: RwSignal::new(GenerationFlow::new(kind)),
            file: StoredValue::new_local(None),
        }
    }

    /// Replace the pending artifact; clears any prior result or error.
    /// Ignored while a request is outstanding.
    pub fn select_file(&self, file: web_sys::File) {
        if self.flow.with_untracked(|flow| flow.is_requesting()) {
            return;
        }
        let meta = ArtifactMeta::new(file.name(), file.size() as u64);
        self.file.set_value(Some(file));
        self.flow.update(|flow| flow.select_artifact(meta));
    }

    /// Kick off generation. No-op when nothing is selected or a request is
    /// already outstanding; emits a toast on both outcomes.
    pub fn generate(&self, toasts: ToastService) {
        let mut request = None;
        self.flow.update(|flow| request = flow.try_begin());
        let Some(request) = request else {
            return;
        };
        let Some(file) = self.file.get_value() else {
            self.flow.update(|flow| flow.fail("No file selected"));
            return;
        };

        let flow = self.flow;
        leptos::task::spawn_local(async move {
            let label = request.kind.label();
            match api::generate(&request, file).await {
                Ok(result) => {
                    toasts.success(format!("{} ready", label));
                    flow.update(|flow| flow.complete(result));
                }
                Err(e) => {
                    toasts.error(format!("{} failed: {}", label, e));
                    flow.update(|flow| flow.fail(e));
                }
            }
        });
    }

    /// Clear artifact, result and error. The reset button is hidden while a
    /// request is outstanding; this guard is the backstop.
    pub fn reset(&self) {
        if self.flow.with_untracked(|flow| flow.is_requesting()) {
            return;
        }
        self.file.set_value(None);
        self.flow.update(|flow| flow.reset());
    }
}
