use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG: &str = r#"# Codesniff Configuration

[detection]
# A declared language ranked second is still accepted when its score is at
# least this fraction of the top score
match_tolerance = 0.85

# Mismatches at or above this confidence name the detected language
medium_confidence = 0.4

# Below this confidence content is reported as matching no language
low_confidence = 0.15

# Snippets with fewer tokens get proportionally less confidence
min_tokens_for_full_confidence = 10

# Repeats of one marker beyond this count are ignored
max_occurrences_per_signature = 5

# Share of non-printable characters that marks input as binary
binary_ratio_threshold = 0.10

[output]
default_format = "terminal"
show_all_candidates = false
"#;

/// Write the default configuration into `dir`
pub fn write_default_config(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG)?;
    Ok(config_path)
}

pub fn init_config(force: bool) -> Result<()> {
    write_default_config(Path::new("."), force)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");
    Ok(())
}
