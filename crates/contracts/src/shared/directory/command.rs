/// User interactions, applied to [`super::DirectoryState`] one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryCommand {
    /// Raw text typed into the search field.
    Search(String),
    ToggleSort,
    /// Index of the row in the visible set.
    ExpandRow(usize),
    /// Text of a clicked tag chip.
    FilterByTag(String),
    /// Text of a clicked category label.
    FilterByCategory(String),
}

impl DirectoryCommand {
    /// Commands that rebuild the visible set and collapse every row.
    pub fn rebuilds_view(&self) -> bool {
        !matches!(self, DirectoryCommand::ExpandRow(_))
    }
}
