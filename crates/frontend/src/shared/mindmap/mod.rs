pub mod outline;
pub mod tree_view;
pub mod widget;

pub use widget::MindMapViewer;
