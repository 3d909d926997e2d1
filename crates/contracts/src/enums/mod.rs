pub mod content_kind;

pub use content_kind::ContentKind;
