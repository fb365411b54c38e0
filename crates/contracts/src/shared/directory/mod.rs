//! Platform directory: the state behind the searchable, sortable table.

pub mod command;
pub mod query;
pub mod state;
pub mod view_model;

pub use command::DirectoryCommand;
pub use query::SearchQuery;
pub use state::DirectoryState;
pub use view_model::{DirectoryView, PlatformRowView, TableBody};
