pub mod directory;
pub mod row;
