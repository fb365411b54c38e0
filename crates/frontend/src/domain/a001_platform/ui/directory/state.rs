use crate::shared::collator::BrowserCollator;
use contracts::domain::a001_platform::Platform;
use contracts::shared::directory::{DirectoryCommand, DirectoryState, DirectoryView};
use leptos::html::Input;
use leptos::prelude::*;

/// Handle to the page's directory state, copied into every event handler.
#[derive(Clone, Copy)]
pub struct DirectoryHandle {
    state: RwSignal<DirectoryState>,
    search_input: NodeRef<Input>,
}

impl DirectoryHandle {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(DirectoryState::new()),
            search_input: NodeRef::new(),
        }
    }

    pub fn search_input(&self) -> NodeRef<Input> {
        self.search_input
    }

    pub fn search_text(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.search_text().to_string()))
    }

    pub fn view(&self) -> Memo<DirectoryView> {
        let state = self.state;
        Memo::new(move |_| state.with(DirectoryState::view))
    }

    pub fn load(&self, platforms: Vec<Platform>) {
        self.state.update(|s| s.load(platforms));
    }

    pub fn dispatch(&self, command: DirectoryCommand) {
        if command.rebuilds_view() {
            log::debug!("directory: {:?}", command);
        }
        self.state.update(|s| s.apply(command, &BrowserCollator));
    }

    /// Tag chip click: fills the search field with `+tag` and filters.
    pub fn filter_by_tag(&self, tag: &str) {
        self.dispatch(DirectoryCommand::FilterByTag(tag.to_string()));
        self.flash_search_focus();
    }

    /// Category label click: fills the search field with `#category` and filters.
    pub fn filter_by_category(&self, category: &str) {
        self.dispatch(DirectoryCommand::FilterByCategory(category.to_string()));
        self.flash_search_focus();
    }

    // Focus then blur: the filled-in value stays visible without a caret.
    fn flash_search_focus(&self) {
        if let Some(input) = self.search_input.get_untracked() {
            let _ = input.focus();
            let _ = input.blur();
        }
    }
}

impl Default for DirectoryHandle {
    fn default() -> Self {
        Self::new()
    }
}
