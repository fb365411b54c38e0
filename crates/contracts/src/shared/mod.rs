pub mod directory;
pub mod list_utils;
