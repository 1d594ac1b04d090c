pub mod error;
pub mod filter;
pub mod models;
pub mod parser;
pub mod selection;
pub mod toggle;
