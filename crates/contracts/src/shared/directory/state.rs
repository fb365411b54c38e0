use super::command::DirectoryCommand;
use super::query::SearchQuery;
use crate::domain::a001_platform::Platform;
use crate::shared::list_utils::{filter_list, sort_list, Collator};
use std::collections::BTreeSet;

const SORT_FIELD: &str = "name";

/// State of the platform directory for one page load.
///
/// `visible` is always derived from `all`: every filter starts over from the
/// loaded order, discarding any sort applied before it.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryState {
    all: Vec<Platform>,
    visible: Vec<Platform>,
    sort_ascending: bool,
    search_text: String,
    expanded: BTreeSet<usize>,
    sorted: bool,
    loaded: bool,
}

impl Default for DirectoryState {
    fn default() -> Self {
        Self {
            all: Vec::new(),
            visible: Vec::new(),
            sort_ascending: true,
            search_text: String::new(),
            expanded: BTreeSet::new(),
            sorted: false,
            loaded: false,
        }
    }
}

impl DirectoryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built from already-loaded records; same as `new()` followed by `load()`.
    pub fn with_platforms(platforms: Vec<Platform>) -> Self {
        let mut state = Self::new();
        state.load(platforms);
        state
    }

    /// Installs the loaded records. The visible set is the full list, unsorted.
    pub fn load(&mut self, platforms: Vec<Platform>) {
        self.visible = platforms.clone();
        self.all = platforms;
        self.expanded.clear();
        self.sorted = false;
        self.loaded = true;
    }

    pub fn all_records(&self) -> &[Platform] {
        &self.all
    }

    pub fn visible_records(&self) -> &[Platform] {
        &self.visible
    }

    pub fn sort_ascending(&self) -> bool {
        self.sort_ascending
    }

    /// Direction of the current order, or `None` while in loaded order.
    pub fn sort_order(&self) -> Option<bool> {
        self.sorted.then_some(self.sort_ascending)
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.contains(&index)
    }

    pub fn apply(&mut self, command: DirectoryCommand, collator: &dyn Collator) {
        match command {
            DirectoryCommand::Search(text) => {
                self.search_text = text;
                self.refilter();
            }
            DirectoryCommand::ToggleSort => self.toggle_sort(collator),
            DirectoryCommand::ExpandRow(index) => self.toggle_row(index),
            DirectoryCommand::FilterByTag(tag) => {
                self.search_text = SearchQuery::for_tag(&tag);
                self.refilter();
            }
            DirectoryCommand::FilterByCategory(category) => {
                self.search_text = SearchQuery::for_category(&category);
                self.refilter();
            }
        }
    }

    /// Rebuilds the visible set from all records for `term`.
    pub fn filter(&mut self, term: &str) {
        let query = SearchQuery::parse(term);
        self.visible = filter_list(&self.all, &query);
        self.expanded.clear();
        self.sorted = false;
    }

    /// Flips the direction, then sorts the current visible set by name.
    pub fn toggle_sort(&mut self, collator: &dyn Collator) {
        self.sort_ascending = !self.sort_ascending;
        let mut sorted = self.visible.clone();
        sort_list(&mut sorted, SORT_FIELD, self.sort_ascending, collator);
        self.visible = sorted;
        self.expanded.clear();
        self.sorted = true;
    }

    /// Out-of-range indexes are ignored.
    pub fn toggle_row(&mut self, index: usize) {
        if index >= self.visible.len() {
            return;
        }
        if !self.expanded.remove(&index) {
            self.expanded.insert(index);
        }
    }

    fn refilter(&mut self) {
        let term = self.search_text.clone();
        self.filter(&term);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_platform::fallback_platforms;
    use crate::shared::list_utils::DefaultCollator;

    fn names(state: &DirectoryState) -> Vec<&str> {
        state.visible_records().iter().map(|p| p.name.as_str()).collect()
    }

    fn fallback_state() -> DirectoryState {
        DirectoryState::with_platforms(fallback_platforms())
    }

    #[test]
    fn test_load_shows_everything_unsorted() {
        let state = fallback_state();
        assert!(state.is_loaded());
        assert_eq!(state.visible_records(), state.all_records());
        assert_eq!(
            names(&state),
            vec!["ProtonMail", "GitHub", "Dropbox", "Discord", "Pastebin", "Telegram"]
        );
    }

    #[test]
    fn test_filter_general_is_stable() {
        let mut state = fallback_state();
        // ProtonMail matches through its free tier text
        state.filter("storage");
        assert_eq!(names(&state), vec!["ProtonMail", "Dropbox", "Pastebin"]);

        state.filter("unlimited");
        assert_eq!(names(&state), vec!["GitHub", "Discord", "Pastebin", "Telegram"]);
    }

    #[test]
    fn test_filter_by_tag_prefix() {
        let mut state = fallback_state();
        state.filter("+free tier");
        assert_eq!(state.visible_records().len(), 6);

        state.filter("+sso");
        assert_eq!(names(&state), vec!["GitHub", "Discord"]);
    }

    #[test]
    fn test_filter_by_category_prefix() {
        let mut state = fallback_state();
        state.filter("#communication");
        assert_eq!(names(&state), vec!["Discord", "Telegram"]);
    }

    #[test]
    fn test_filter_no_match() {
        let mut state = fallback_state();
        state.filter("zzz-no-match");
        assert!(state.visible_records().is_empty());
        assert_eq!(state.all_records().len(), 6);
    }

    #[test]
    fn test_whitespace_search_restores_all() {
        let mut state = fallback_state();
        state.filter("#email");
        state.filter("   ");
        assert_eq!(state.visible_records(), state.all_records());
    }

    #[test]
    fn test_first_toggle_sorts_descending() {
        let mut state = fallback_state();
        assert_eq!(state.sort_order(), None);
        state.toggle_sort(&DefaultCollator);
        assert_eq!(state.sort_order(), Some(false));
        assert_eq!(
            names(&state),
            vec!["Telegram", "ProtonMail", "Pastebin", "GitHub", "Dropbox", "Discord"]
        );

        state.toggle_sort(&DefaultCollator);
        assert!(state.sort_ascending());
        assert_eq!(
            names(&state),
            vec!["Discord", "Dropbox", "GitHub", "Pastebin", "ProtonMail", "Telegram"]
        );
    }

    #[test]
    fn test_double_toggle_from_sorted_is_identity() {
        let mut state = fallback_state();
        state.toggle_sort(&DefaultCollator);
        let before: Vec<String> = names(&state).iter().map(|s| s.to_string()).collect();

        state.toggle_sort(&DefaultCollator);
        state.toggle_sort(&DefaultCollator);
        assert_eq!(names(&state), before);
    }

    #[test]
    fn test_filter_discards_sort() {
        let mut state = fallback_state();
        state.toggle_sort(&DefaultCollator);
        state.filter("");
        assert_eq!(state.visible_records(), state.all_records());
        // direction flag survives, only the order is dropped
        assert!(!state.sort_ascending());
        assert_eq!(state.sort_order(), None);
    }

    #[test]
    fn test_sort_applies_to_filtered_subset() {
        let mut state = fallback_state();
        state.filter("#storage");
        state.toggle_sort(&DefaultCollator);
        assert_eq!(names(&state), vec!["Pastebin", "Dropbox"]);
    }

    #[test]
    fn test_tag_click_command() {
        let mut state = fallback_state();
        state.apply(DirectoryCommand::FilterByTag("C&C".into()), &DefaultCollator);
        assert_eq!(state.search_text(), "+c&c");
        assert_eq!(names(&state), vec!["GitHub", "Discord", "Pastebin", "Telegram"]);
    }

    #[test]
    fn test_category_click_command() {
        let mut state = fallback_state();
        state.apply(DirectoryCommand::FilterByCategory(" Storage ".into()), &DefaultCollator);
        assert_eq!(state.search_text(), "#storage");
        assert_eq!(names(&state), vec!["Dropbox", "Pastebin"]);
    }

    #[test]
    fn test_search_command_keeps_raw_text() {
        let mut state = fallback_state();
        state.apply(DirectoryCommand::Search(" Git".into()), &DefaultCollator);
        assert_eq!(state.search_text(), " Git");
        assert_eq!(names(&state), vec!["GitHub"]);
    }

    #[test]
    fn test_expansion_toggles_and_resets() {
        let mut state = fallback_state();
        state.apply(DirectoryCommand::ExpandRow(1), &DefaultCollator);
        assert!(state.is_expanded(1));
        state.apply(DirectoryCommand::ExpandRow(1), &DefaultCollator);
        assert!(!state.is_expanded(1));

        state.apply(DirectoryCommand::ExpandRow(2), &DefaultCollator);
        state.apply(DirectoryCommand::ToggleSort, &DefaultCollator);
        assert!(!state.is_expanded(2));

        state.apply(DirectoryCommand::ExpandRow(0), &DefaultCollator);
        state.apply(DirectoryCommand::Search("git".into()), &DefaultCollator);
        assert!(!state.is_expanded(0));
    }

    #[test]
    fn test_expand_out_of_range_is_ignored() {
        let mut state = fallback_state();
        state.toggle_row(42);
        assert!(!state.is_expanded(42));
    }

    #[test]
    fn test_visible_is_subset_of_all() {
        let mut state = fallback_state();
        for term in ["git", "+c&c", "#s", "free", "zzz"] {
            state.filter(term);
            state.toggle_sort(&DefaultCollator);
            assert!(state
                .visible_records()
                .iter()
                .all(|p| state.all_records().contains(p)));
        }
    }
}
