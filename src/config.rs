use crate::error::{PageScoreError, Result};
use crate::types::config::PageScoreConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "pagescore.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".pagescore/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/pagescore/config.toml";

/// Loads and validates configuration from the global file, the project file
/// (`explicit` or `pagescore.toml` under `root`) and the local override, in
/// that order. Missing files are skipped; an explicit path must exist.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<PageScoreConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, explicit, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    explicit: Option<&Path>,
    global_path: Option<&Path>,
) -> Result<PageScoreConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(PageScoreError::PathNotFound(path.display().to_string()));
        }
    }

    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    let project_path = explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.join(DEFAULT_CONFIG_FILE));
    merge_file_if_exists(&mut merged, &project_path)?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    let cfg: PageScoreConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| PageScoreError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    tracing::debug!(path = %project_path.display(), "configuration loaded");
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| PageScoreError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::config::IdealRange;
    use crate::types::scoring::{Criterion, WeightTable};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_defaults_when_no_files_exist() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None, None).expect("load should not fail");
        assert!(cfg.weights.is_none());
        assert_eq!(
            cfg.weight_table().expect("default table"),
            WeightTable::default()
        );
    }

    #[test]
    fn load_config_rejects_missing_explicit_path() {
        let dir = TempDir::new().expect("temp dir should be created");
        let missing = dir.path().join("nope.toml");
        let err = load_config_with_global(dir.path(), Some(&missing), None)
            .expect_err("missing explicit config should fail");
        assert!(matches!(err, PageScoreError::PathNotFound(_)));
    }

    #[test]
    fn load_config_merges_global_project_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[weights]
informativeness = 0.20
readability = 0.15
engagement = 0.15
uniqueness = 0.15
layout_quality = 0.10
discoverability = 0.10
seo_keywords = 0.05
ad_experience = 0.05
social_integration = 0.05

[thresholds.seo_keywords]
title_length = { min = 20.0, max = 50.0 }
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[weights]
informativeness = 0.25
social_integration = 0.00001

[thresholds.discoverability]
ideal_nav_count = { min = 1.0, max = 4.0 }
"#,
        )
        .expect("project config should write");

        fs::create_dir_all(root.path().join(".pagescore")).expect("local dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[weights]
social_integration = 0.05
engagement = 0.10
"#,
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), None, Some(&global_path))
            .expect("merged config should load");
        let weights = cfg.weight_table().expect("merged weights should validate");

        assert!((weights.weight(Criterion::Informativeness) - 0.25).abs() < 1e-9);
        assert!((weights.weight(Criterion::Engagement) - 0.10).abs() < 1e-9);
        assert!((weights.weight(Criterion::SocialIntegration) - 0.05).abs() < 1e-9);
        assert_eq!(
            cfg.thresholds.seo_keywords.title_length,
            IdealRange::new(20.0, 50.0)
        );
        assert_eq!(
            cfg.thresholds.discoverability.ideal_nav_count,
            IdealRange::new(1.0, 4.0)
        );
    }

    #[test]
    fn load_config_fails_fast_on_bad_weights() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[weights]
informativeness = 1.0
"#,
        )
        .expect("project config should write");

        let err = load_config_with_global(root.path(), None, None)
            .expect_err("incomplete weight table should fail");
        assert!(err.is_configuration());
    }
}
