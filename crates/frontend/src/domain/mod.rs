pub mod a001_study_material;
pub mod a002_study_chat;
