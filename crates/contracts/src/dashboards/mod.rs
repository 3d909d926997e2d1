pub mod d100_study_overview;
