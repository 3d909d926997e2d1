pub mod u600_generate_content;
pub mod u601_smart_summary;
pub mod u602_flashcards;
pub mod u603_quiz;
pub mod u604_mind_map;
pub mod u605_learning_path;
