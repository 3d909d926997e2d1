//! Assistant Chat Details - View Model

use contracts::domain::a001_study_material::StudyMaterialListItem;
use contracts::domain::a002_study_chat::{ChatTranscript, StudyChat, StudyChatId};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ChatDetailsVm {
    pub material: RwSignal<Option<StudyMaterialListItem>>,
    pub chat: RwSignal<Option<StudyChat>>,
    pub transcript: RwSignal<ChatTranscript>,
    pub draft: RwSignal<String>,
    pub is_typing: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl ChatDetailsVm {
    pub fn new() -> Self {
        Self {
            material: RwSignal::new(None),
            chat: RwSignal::new(None),
            transcript: RwSignal::new(ChatTranscript::new(StudyChatId::new_v4())),
            draft: RwSignal::new(String::new()),
            is_typing: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }
}
