// Sub-modules
mod core;
mod detection;
mod loader;

// Re-export core types
pub use self::core::{CodesniffConfig, OutputConfig};

// Re-export detection thresholds
pub use detection::{
    default_binary_ratio_threshold, default_low_confidence, default_match_tolerance,
    default_max_occurrences_per_signature, default_medium_confidence,
    default_min_tokens_for_full_confidence, DetectionConfig,
};

// Re-export loader functions
pub use loader::{
    directory_ancestors, load_config, load_config_file, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
