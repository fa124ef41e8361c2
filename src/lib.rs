pub mod error;
pub mod layout;
pub mod native;
pub mod render;
