use super::request::{ArtifactMeta, GenerationRequest};
use super::response::GenerationResult;
use crate::enums::ContentKind;

/// Phase of one generation dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationPhase {
    Idle,
    Requesting,
    Succeeded,
    Failed,
}

/// State of one Upload -> Generate -> Present dialog.
///
/// Plain struct on purpose; the UI layer wraps it in a signal. At most one
/// request is outstanding per flow: `try_begin` refuses to start a second
/// one, and resolutions that arrive for anything but the current request are
/// dropped. Failures are terminal for their request; the user resets or
/// picks a new file, nothing retries on its own.
#[derive(Debug, Clone)]
pub struct GenerationFlow {
    kind: ContentKind,
    phase: GenerationPhase,
    artifact: Option<ArtifactMeta>,
    result: Option<GenerationResult>,
    error: Option<String>,
}

impl GenerationFlow {
    pub fn new(kind: ContentKind) -> Self {
        Self {
            kind,
            phase: GenerationPhase::Idle,
            artifact: None,
            result: None,
            error: None,
        }
    }

    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    pub fn phase(&self) -> GenerationPhase {
        self.phase
    }

    pub fn artifact(&self) -> Option<&ArtifactMeta> {
        self.artifact.as_ref()
    }

    pub fn result(&self) -> Option<&GenerationResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_requesting(&self) -> bool {
        self.phase == GenerationPhase::Requesting
    }

    /// Replace the pending artifact and clear any prior outcome.
    ///
    /// Ignored while a request is outstanding; the UI disables the picker in
    /// that phase, this is the backstop.
    pub fn select_artifact(&mut self, meta: ArtifactMeta) {
        if self.is_requesting() {
            return;
        }
        self.artifact = Some(meta);
        self.result = None;
        self.error = None;
        self.phase = GenerationPhase::Idle;
    }

    /// Start a generation request if one can be started.
    ///
    /// Returns `None` without touching state when no artifact is selected or
    /// a request is already outstanding.
    pub fn try_begin(&mut self) -> Option<GenerationRequest> {
        if self.is_requesting() {
            return None;
        }
        let artifact = self.artifact.as_ref()?;
        let request = GenerationRequest::new(self.kind, artifact);
        self.phase = GenerationPhase::Requesting;
        self.error = None;
        self.result = None;
        Some(request)
    }

    /// Resolve the outstanding request with content.
    ///
    /// Dropped unless a request is outstanding, so a response that lands
    /// after `reset` cannot resurrect stale state.
    pub fn complete(&mut self, result: GenerationResult) {
        if !self.is_requesting() {
            return;
        }
        self.result = Some(result);
        self.error = None;
        self.phase = GenerationPhase::Succeeded;
    }

    /// Resolve the outstanding request with an error message (verbatim from
    /// the service).
    pub fn fail(&mut self, message: impl Into<String>) {
        if !self.is_requesting() {
            return;
        }
        self.error = Some(message.into());
        self.result = None;
        self.phase = GenerationPhase::Failed;
    }

    /// Clear artifact, result and error; back to `Idle`.
    pub fn reset(&mut self) {
        self.artifact = None;
        self.result = None;
        self.error = None;
        self.phase = GenerationPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn meta(name: &str) -> ArtifactMeta {
        ArtifactMeta::new(name, 2048)
    }

    fn result_with(content: &str) -> GenerationResult {
        GenerationResult {
            kind: ContentKind::Summary,
            source_file_name: "notes.pdf".into(),
            content: content.into(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn begin_without_artifact_is_a_no_op() {
        let mut flow = GenerationFlow::new(ContentKind::Summary);
        assert!(flow.try_begin().is_none());
        assert_eq!(flow.phase(), GenerationPhase::Idle);
        assert!(flow.error().is_none());
    }

    #[test]
    fn begin_while_requesting_is_a_no_op() {
        let mut flow = GenerationFlow::new(ContentKind::Quiz);
        flow.select_artifact(meta("notes.pdf"));
        assert!(flow.try_begin().is_some());
        // Second trigger while the first is outstanding is ignored
        assert!(flow.try_begin().is_none());
        assert_eq!(flow.phase(), GenerationPhase::Requesting);
    }

    #[test]
    fn completion_stores_content_exactly() {
        let mut flow = GenerationFlow::new(ContentKind::Summary);
        flow.select_artifact(meta("notes.pdf"));
        flow.try_begin().unwrap();
        flow.complete(result_with("X"));

        assert_eq!(flow.phase(), GenerationPhase::Succeeded);
        assert_eq!(flow.result().unwrap().content, "X");
        assert!(flow.error().is_none());
    }

    #[test]
    fn failure_keeps_the_message() {
        let mut flow = GenerationFlow::new(ContentKind::Flashcards);
        flow.select_artifact(meta("notes.pdf"));
        flow.try_begin().unwrap();
        flow.fail("Y");

        assert_eq!(flow.phase(), GenerationPhase::Failed);
        assert!(flow.error().unwrap().contains("Y"));
        assert!(flow.result().is_none());
    }

    #[test]
    fn new_artifact_clears_prior_outcome() {
        let mut flow = GenerationFlow::new(ContentKind::Summary);
        flow.select_artifact(meta("first.pdf"));
        flow.try_begin().unwrap();
        flow.complete(result_with("old content"));

        flow.select_artifact(meta("second.pdf"));
        assert_eq!(flow.phase(), GenerationPhase::Idle);
        assert!(flow.result().is_none());
        assert!(flow.error().is_none());
        assert_eq!(flow.artifact().unwrap().file_name, "second.pdf");

        // Same after a failure
        flow.try_begin().unwrap();
        flow.fail("boom");
        flow.select_artifact(meta("third.pdf"));
        assert!(flow.error().is_none());
    }

    #[test]
    fn reset_returns_to_idle_with_nothing_retained() {
        let mut flow = GenerationFlow::new(ContentKind::MindMap);
        flow.select_artifact(meta("notes.pdf"));
        flow.try_begin().unwrap();
        flow.fail("service unavailable");

        flow.reset();
        assert_eq!(flow.phase(), GenerationPhase::Idle);
        assert!(flow.artifact().is_none());
        assert!(flow.result().is_none());
        assert!(flow.error().is_none());
    }

    #[test]
    fn late_resolution_after_reset_is_dropped() {
        let mut flow = GenerationFlow::new(ContentKind::Summary);
        flow.select_artifact(meta("notes.pdf"));
        flow.try_begin().unwrap();
        flow.reset();

        flow.complete(result_with("stale"));
        assert_eq!(flow.phase(), GenerationPhase::Idle);
        assert!(flow.result().is_none());

        flow.fail("stale error");
        assert!(flow.error().is_none());
    }

    #[test]
    fn selecting_while_requesting_is_ignored() {
        let mut flow = GenerationFlow::new(ContentKind::Summary);
        flow.select_artifact(meta("first.pdf"));
        flow.try_begin().unwrap();
        flow.select_artifact(meta("second.pdf"));
        assert_eq!(flow.artifact().unwrap().file_name, "first.pdf");
        assert!(flow.is_requesting());
    }
}
