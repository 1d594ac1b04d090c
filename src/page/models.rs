use super::error::PageError;
use super::toggle::RowState;
use std::collections::HashMap;

pub const SEARCH_INPUT_ID: &str = "myInput";
pub const LIST_ID: &str = "myUL";
pub const CHECKED_PREFIX: &str = "checked_";
pub const UNCHECKED_PREFIX: &str = "unchecked_";

/// Which of the two list elements of a row is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    Checked,
    Unchecked,
}

impl Representation {
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Checked => CHECKED_PREFIX,
            Self::Unchecked => UNCHECKED_PREFIX,
        }
    }

    pub fn element_id(self, row_id: &str) -> String {
        format!("{}{}", self.prefix(), row_id)
    }

    /// Splits `checked_<id>` / `unchecked_<id>` into its parts.
    pub fn split_element_id(element_id: &str) -> Option<(Self, &str)> {
        // "unchecked_" has to be tried first, "checked_" is its suffix
        if let Some(row_id) = element_id.strip_prefix(UNCHECKED_PREFIX) {
            Some((Self::Unchecked, row_id))
        } else {
            element_id
                .strip_prefix(CHECKED_PREFIX)
                .map(|row_id| (Self::Checked, row_id))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Default,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkbox {
    pub id: String,
    pub checked: bool,
}

/// An `li` element: one label and one checkbox input.
#[derive(Debug, Clone)]
pub struct ListElement {
    pub id: String,
    pub row_id: String,
    pub representation: Representation,
    pub hidden: bool,
    pub display: Display,
    pub label: String,
    pub checkbox: Checkbox,
}

impl ListElement {
    fn new(row_id: &str, label: &str, representation: Representation) -> Self {
        Self {
            id: representation.element_id(row_id),
            row_id: row_id.to_string(),
            representation,
            hidden: representation == Representation::Checked,
            display: Display::Default,
            label: label.to_string(),
            checkbox: Checkbox {
                id: match representation {
                    Representation::Checked => row_id.to_string(),
                    Representation::Unchecked => format!("{}-unchecked", row_id),
                },
                checked: false,
            },
        }
    }

    /// Rendered on screen: not hidden by the toggle and not filtered out.
    pub fn is_visible(&self) -> bool {
        !self.hidden && self.display == Display::Default
    }
}

#[derive(Debug, Clone, Default)]
pub struct TextInput {
    pub id: String,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct Row {
    pub id: String,
    pub state: RowState,
}

/// In-memory page: the search box, the `myUL` list and the row pairs inside it.
#[derive(Debug, Clone)]
pub struct Page {
    pub title: String,
    pub source_path: String,
    input: TextInput,
    list_id: String,
    elements: Vec<ListElement>,
    rows: Vec<Row>,
    index: HashMap<String, usize>,
}

impl Page {
    pub fn new(source_path: String) -> Self {
        Self {
            title: String::new(),
            source_path,
            input: TextInput {
                id: SEARCH_INPUT_ID.to_string(),
                value: String::new(),
            },
            list_id: LIST_ID.to_string(),
            elements: Vec::new(),
            rows: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Appends a row as a `checked_<id>` / `unchecked_<id>` pair, unchecked twin visible.
    pub fn add_row(&mut self, row_id: &str, label: &str) -> Result<(), PageError> {
        // the cookie is read back percent-decoded and split on ','
        if row_id.is_empty()
            || row_id.contains([',', ';', '%'])
            || row_id.contains(char::is_whitespace)
        {
            return Err(PageError::InvalidRowId(row_id.to_string()));
        }
        if self.rows.iter().any(|row| row.id == row_id) {
            return Err(PageError::DuplicateRow(row_id.to_string()));
        }

        for representation in [Representation::Checked, Representation::Unchecked] {
            let element = ListElement::new(row_id, label, representation);
            self.index.insert(element.id.clone(), self.elements.len());
            self.elements.push(element);
        }
        self.rows.push(Row {
            id: row_id.to_string(),
            state: RowState::Unchecked,
        });
        Ok(())
    }

    pub fn input(&self, id: &str) -> Result<&TextInput, PageError> {
        if self.input.id == id {
            Ok(&self.input)
        } else {
            Err(PageError::ElementNotFound(id.to_string()))
        }
    }

    pub fn input_mut(&mut self, id: &str) -> Result<&mut TextInput, PageError> {
        if self.input.id == id {
            Ok(&mut self.input)
        } else {
            Err(PageError::ElementNotFound(id.to_string()))
        }
    }

    /// The `li` children of the list element `id`.
    #[cfg(test)]
    pub fn list_items(&self, id: &str) -> Result<&[ListElement], PageError> {
        if self.list_id == id {
            Ok(&self.elements)
        } else {
            Err(PageError::ElementNotFound(id.to_string()))
        }
    }

    pub fn list_items_mut(&mut self, id: &str) -> Result<&mut [ListElement], PageError> {
        if self.list_id == id {
            Ok(&mut self.elements)
        } else {
            Err(PageError::ElementNotFound(id.to_string()))
        }
    }

    pub fn element(&self, id: &str) -> Result<&ListElement, PageError> {
        self.index
            .get(id)
            .map(|&i| &self.elements[i])
            .ok_or_else(|| PageError::ElementNotFound(id.to_string()))
    }

    pub fn element_mut(&mut self, id: &str) -> Result<&mut ListElement, PageError> {
        match self.index.get(id) {
            Some(&i) => Ok(&mut self.elements[i]),
            None => Err(PageError::ElementNotFound(id.to_string())),
        }
    }

    #[cfg(test)]
    pub fn row(&self, row_id: &str) -> Result<&Row, PageError> {
        self.rows
            .iter()
            .find(|row| row.id == row_id)
            .ok_or_else(|| PageError::ElementNotFound(row_id.to_string()))
    }

    pub(crate) fn row_mut(&mut self, row_id: &str) -> Result<&mut Row, PageError> {
        self.rows
            .iter_mut()
            .find(|row| row.id == row_id)
            .ok_or_else(|| PageError::ElementNotFound(row_id.to_string()))
    }

    pub fn visible_elements(&self) -> impl Iterator<Item = &ListElement> {
        self.elements.iter().filter(|element| element.is_visible())
    }

    pub fn total_rows(&self) -> usize {
        self.rows.len()
    }

    #[cfg(test)]
    pub fn checked_rows(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| row.state == RowState::Checked)
            .count()
    }
}
