//! Core types shared by the catalog, classifier and validator.

pub mod errors;
pub mod language;

pub use errors::{Error, Result, ResultExt};
pub use language::Language;
