//! Application main state structure

use std::collections::{BTreeSet, HashSet};

use readings_core::Article;

use super::ViewState;

/// Rows reserved for the title and status areas; the scroll window is the
/// viewport height minus these.
const RESERVED_ROWS: u16 = 4;

/// Application main state
///
/// Owned exclusively by the event loop; every mutation goes through the
/// update layer.
pub struct App {
    /// Whether the loop should exit
    pub should_quit: bool,

    /// Active view
    pub view: ViewState,

    /// Terminal size
    pub width: u16,
    pub height: u16,

    /// Full article list, shuffled once at startup
    pub articles: Vec<Article>,

    /// Currently displayed subset; always a relative-order subsequence of
    /// `articles`
    pub filtered: Vec<Article>,

    /// Sorted unique tags across the full list
    pub tags: Vec<String>,

    /// Tag selection working set; empty means "show all"
    pub selected_tags: HashSet<String>,

    /// Snapshot of `selected_tags` taken on entering Filter, used by cancel.
    /// `Some` only while `view == Filter`.
    pub backup_selected_tags: Option<HashSet<String>>,

    /// Cursor index into the active list (articles or tags)
    pub cursor: usize,

    /// First visible row of the active list
    pub scroll_offset: usize,

    /// Pending numeric-repeat prefix (decimal digits)
    pub input_buffer: String,

    /// Transient status message
    pub status_message: Option<String>,
}

impl App {
    /// Create the initial state from the startup article set.
    #[must_use]
    pub fn new(articles: Vec<Article>, width: u16, height: u16) -> Self {
        // Sorted unique tag list for the filter view.
        let tags: Vec<String> = articles
            .iter()
            .flat_map(|a| a.tags.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        Self {
            should_quit: false,
            view: ViewState::List,
            width,
            height,
            filtered: articles.clone(),
            articles,
            tags,
            selected_tags: HashSet::new(),
            backup_selected_tags: None,
            cursor: 0,
            scroll_offset: 0,
            input_buffer: String::new(),
            status_message: None,
        }
    }

    /// The number of list rows that fit in the scroll window.
    #[must_use]
    pub fn window_height(&self) -> usize {
        usize::from(self.height.saturating_sub(RESERVED_ROWS)).max(1)
    }

    /// Consume the numeric prefix: `Some(n)` for a non-empty buffer parsing
    /// to a positive value, `None` otherwise. Always clears the buffer.
    pub fn take_prefix(&mut self) -> Option<usize> {
        let parsed = self.input_buffer.parse::<usize>().ok().filter(|n| *n > 0);
        self.input_buffer.clear();
        parsed
    }

    /// Recompute `filtered` from the full list and the selection set.
    ///
    /// Empty selection shows everything; otherwise an article is kept when
    /// any of its tags is selected. Original relative order is preserved.
    pub fn apply_filter(&mut self) {
        if self.selected_tags.is_empty() {
            self.filtered = self.articles.clone();
            return;
        }
        self.filtered = self
            .articles
            .iter()
            .filter(|a| a.tags.iter().any(|t| self.selected_tags.contains(t)))
            .cloned()
            .collect();
    }

    /// Set a transient status message.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message.
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
