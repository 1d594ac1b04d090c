use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageError {
    #[error("no element with id '{0}' on the page")]
    ElementNotFound(String),
    #[error("row id '{0}' must be non-empty and free of ',', ';', '%' and whitespace")]
    InvalidRowId(String),
    #[error("row id '{0}' appears more than once")]
    DuplicateRow(String),
}
