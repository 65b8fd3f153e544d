pub mod catalog;
pub mod defaults;
pub mod error;
pub mod render;
