pub mod build;
pub mod build_po;
mod command_result;
pub mod info;
pub mod init;
pub mod install;

pub use command_result::*;
