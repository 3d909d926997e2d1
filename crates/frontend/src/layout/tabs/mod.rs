pub mod bar;
pub mod page;
pub mod registry;
pub mod tab_labels;

pub use bar::TabsBar;
pub use page::TabPage;
pub use tab_labels::tab_label_for_key;
