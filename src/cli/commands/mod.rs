pub mod check;
mod command_result;
pub mod get;
pub mod helper;
pub mod init;
pub mod keys;
pub mod list;
pub mod render;

pub use command_result::*;
