use super::error::PageError;
use super::models::{Display, Page, LIST_ID, SEARCH_INPUT_ID};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterSummary {
    pub shown: usize,
    pub hidden: usize,
}

pub fn label_matches(label: &str, query: &str) -> bool {
    label.to_uppercase().contains(&query.to_uppercase())
}

/// Reads the search box and shows only the list items whose label contains its value.
pub fn apply_filter(page: &mut Page) -> Result<FilterSummary, PageError> {
    let query = page.input(SEARCH_INPUT_ID)?.value.clone();
    let mut summary = FilterSummary::default();

    for item in page.list_items_mut(LIST_ID)? {
        if label_matches(&item.label, &query) {
            item.display = Display::Default;
            summary.shown += 1;
        } else {
            item.display = Display::None;
            summary.hidden += 1;
        }
    }

    debug!(query = %query, shown = summary.shown, hidden = summary.hidden, "filter applied");
    Ok(summary)
}
