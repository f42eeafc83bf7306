//! Source-code language classification and declared-language validation.
//!
//! ```
//! use codesniff::{Classifier, Language, Validator};
//!
//! let classifier = Classifier::with_defaults();
//! let result = classifier.classify("def add(a, b):\n    return a + b");
//! assert_eq!(result.language(), Language::Python);
//!
//! let verdict = Validator::default().validate(Language::C, "int main() { return 0; }");
//! assert!(verdict.matches);
//! ```

// Export modules for library usage
pub mod catalog;
pub mod classifier;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod validator;

// Re-export commonly used types
pub use crate::core::{Error, Language, Result};

pub use crate::catalog::{MarkerClass, Signature, SignatureCatalog, SignatureKind};

pub use crate::classifier::{
    Classification, Classifier, Evidence, FeatureSet, Inconclusive, ScoredCandidate,
};

pub use crate::validator::{ValidationVerdict, Validator};

pub use crate::config::{CodesniffConfig, DetectionConfig};

pub use crate::io::output::{create_writer, OutputFormat, ReportWriter};
