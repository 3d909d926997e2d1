pub mod api;
pub mod panel;
pub mod view_model;

pub use panel::GenerationPanel;
pub use view_model::GenerationVm;
