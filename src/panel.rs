pub mod impl_buffer;
pub mod impl_console;
pub mod interface;
