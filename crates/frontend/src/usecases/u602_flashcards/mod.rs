pub mod view;

pub use view::FlashcardsPage;
