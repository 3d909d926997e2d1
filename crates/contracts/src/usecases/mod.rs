pub mod common;
pub mod u600_generate_content;
