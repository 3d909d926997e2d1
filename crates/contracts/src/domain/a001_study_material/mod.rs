pub mod aggregate;

pub use aggregate::{MaterialFormat, StudyMaterial, StudyMaterialId, StudyMaterialListItem, ACCEPT};
