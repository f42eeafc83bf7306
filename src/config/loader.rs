use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::CodesniffConfig;
use crate::core::{Error, Result, ResultExt};

pub const CONFIG_FILE_NAME: &str = ".codesniff.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse config from a TOML string, replacing invalid detection thresholds
/// with defaults
pub fn parse_and_validate_config(contents: &str) -> Result<CodesniffConfig> {
    let mut config = toml::from_str::<CodesniffConfig>(contents)?;

    if let Some(ref detection) = config.detection {
        if let Err(e) = detection.validate() {
            log::warn!("Invalid detection thresholds: {}. Using defaults.", e);
            config.detection = None;
        }
    }

    Ok(config)
}

/// Try loading config from a specific path; missing or malformed files yield `None`
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<CodesniffConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!(
                "Failed to parse {}: {}. Using defaults.",
                config_path.display(),
                e
            );
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for `.codesniff.toml`
pub fn load_config_from(start: PathBuf) -> CodesniffConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            CodesniffConfig::default()
        })
}

/// Discover the config starting from the current directory
pub fn load_config() -> CodesniffConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            CodesniffConfig::default()
        }
    }
}

/// Load an explicitly requested config file; unlike discovery, failures are errors
pub fn load_config_file(path: &Path) -> Result<CodesniffConfig> {
    let contents = read_config_file(path)
        .map_err(Error::from)
        .context(format!("Reading {}", path.display()))?;
    let config = toml::from_str::<CodesniffConfig>(&contents)
        .map_err(Error::from)
        .context(format!("Parsing {}", path.display()))?;
    if let Some(ref detection) = config.detection {
        detection
            .validate()
            .context(format!("Validating {}", path.display()))?;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let config = parse_and_validate_config(indoc! {r#"
            [detection]
            match_tolerance = 0.9
            medium_confidence = 0.5
            low_confidence = 0.2

            [output]
            default_format = "json"
        "#})
        .unwrap();

        let detection = config.detection();
        assert_eq!(detection.match_tolerance, 0.9);
        assert_eq!(detection.medium_confidence, 0.5);
        assert_eq!(detection.min_tokens_for_full_confidence, 10);
        assert_eq!(
            config.default_format(),
            Some(crate::io::output::OutputFormat::Json)
        );
    }

    #[test]
    fn test_invalid_thresholds_fall_back_to_defaults() {
        let config = parse_and_validate_config(indoc! {r#"
            [detection]
            low_confidence = 0.9
            medium_confidence = 0.1
        "#})
        .unwrap();
        assert!(config.detection.is_none());
        assert_eq!(config.detection().low_confidence, 0.15);
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        assert!(parse_and_validate_config("[detection\nmatch_tolerance = ").is_err());
    }

    #[test]
    fn test_directory_ancestors_respects_depth() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c/d"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c/d"), PathBuf::from("/a/b/c")]);
    }

    #[test]
    fn test_discovers_config_in_parent_directory() {
        let root = TempDir::new().unwrap();
        let nested = root.path().join("src").join("deep");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            root.path().join(CONFIG_FILE_NAME),
            "[detection]\nmatch_tolerance = 0.7\n",
        )
        .unwrap();

        let config = load_config_from(nested);
        assert_eq!(config.detection().match_tolerance, 0.7);
    }

    #[test]
    fn test_explicit_file_errors_are_reported() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(load_config_file(&missing).is_err());

        let bad = dir.path().join("bad.toml");
        fs::write(&bad, "[detection]\nlow_confidence = 2.0\n").unwrap();
        let err = load_config_file(&bad).unwrap_err();
        assert!(err.to_string().contains("low_confidence"));
    }
}
