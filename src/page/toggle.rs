use super::error::PageError;
use super::models::{Page, Representation};
use super::selection::SelectionSet;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowState {
    Checked,
    Unchecked,
}

impl RowState {
    /// Activating a representation always lands on the opposite state: clicking the
    /// checked twin unchecks the row, clicking the unchecked twin checks it.
    pub fn activate(self, activated: Representation) -> RowTransition {
        let to = match activated {
            Representation::Checked => Self::Unchecked,
            Representation::Unchecked => Self::Checked,
        };
        RowTransition { from: self, to }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowTransition {
    pub from: RowState,
    pub to: RowState,
}

/// Handles activation of the `checked_<id>` or `unchecked_<id>` element.
///
/// Both list elements, both checkboxes and the selection set are updated from one
/// `RowTransition`, so exactly one element of the pair stays visible.
pub fn toggle_row(
    page: &mut Page,
    selection: &mut SelectionSet,
    element_id: &str,
) -> Result<RowTransition, PageError> {
    let (activated, row_id) = Representation::split_element_id(element_id)
        .ok_or_else(|| PageError::ElementNotFound(element_id.to_string()))?;
    let row_id = row_id.to_string();

    // Both twins must exist before anything is touched.
    let twin = match activated {
        Representation::Checked => Representation::Unchecked,
        Representation::Unchecked => Representation::Checked,
    };
    page.element(element_id)?;
    page.element(&twin.element_id(&row_id))?;

    let row = page.row_mut(&row_id)?;
    let transition = row.state.activate(activated);
    row.state = transition.to;

    let now_checked = transition.to == RowState::Checked;

    let checked_twin = page.element_mut(&Representation::Checked.element_id(&row_id))?;
    checked_twin.hidden = !now_checked;
    checked_twin.checkbox.checked = now_checked;
    let selection_key = checked_twin.checkbox.id.clone();

    let unchecked_twin = page.element_mut(&Representation::Unchecked.element_id(&row_id))?;
    unchecked_twin.hidden = now_checked;
    unchecked_twin.checkbox.checked = false;

    if now_checked {
        selection.insert(&selection_key);
    } else {
        selection.remove(&selection_key);
    }

    debug!(row = %row_id, from = ?transition.from, to = ?transition.to, "row toggled");
    Ok(transition)
}
