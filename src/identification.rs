pub mod core;
pub mod error;
pub mod flow;
pub mod render;
