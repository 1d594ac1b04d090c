/// Editing state of the search box; the query itself lives in the page's input element.
pub struct SearchState {
    pub search_mode: bool,
    pub search_query: String,
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            search_mode: false,
            search_query: String::new(),
        }
    }

    pub fn enter_search_mode(&mut self) {
        self.search_mode = true;
    }

    /// Leaves search mode and empties the box.
    pub fn cancel_search(&mut self) {
        self.search_mode = false;
        self.search_query.clear();
    }

    /// Leaves search mode, keeping the filter in place.
    pub fn confirm_search(&mut self) {
        self.search_mode = false;
    }

    pub fn insert_char(&mut self, c: char) {
        self.search_query.push(c);
    }

    /// Returns false when there was nothing to delete.
    pub fn backspace(&mut self) -> bool {
        self.search_query.pop().is_some()
    }
}
