//! CLI command implementations.
//!
//! Available commands:
//! - **detect**: Classify files or standard input by language
//! - **validate**: Check content against a declared language
//! - **languages**: List the supported languages
//! - **init**: Initialize a new codesniff configuration file

pub mod detect;
pub mod init;
pub mod languages;
pub mod validate;

pub use detect::{detect, detect_sources, DetectConfig};
pub use init::init_config;
pub use languages::list_languages;
pub use validate::{validate_content, validate_source, ValidateConfig};
