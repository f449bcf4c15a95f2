use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Extensions probed for a tool's settings file, in priority order.
const SETTINGS_CANDIDATES: &[(&str, SettingsFormat)] = &[
    ("yml", SettingsFormat::Yaml),
    ("yaml", SettingsFormat::Yaml),
    ("toml", SettingsFormat::Toml),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsFormat {
    Yaml,
    Toml,
}

#[derive(Debug, Clone)]
pub struct LoadedSettings<T> {
    pub path: PathBuf,
    pub format: SettingsFormat,
    pub data: T,
}

/// Keys a tool's settings file carries beyond the typed fields.
pub type ExtraSettings = BTreeMap<String, serde_yaml::Value>;

/// flog: per-method and total complexity scores.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct StyleSettings {
    #[serde(default)]
    pub threshold: Option<f64>,
    #[serde(default)]
    pub total_score: Option<f64>,
    #[serde(flatten)]
    pub extra: ExtraSettings,
}

/// flay: duplication mass threshold and total score.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct DuplicationSettings {
    #[serde(default)]
    pub threshold: Option<u64>,
    #[serde(default)]
    pub total_score: Option<u64>,
    #[serde(flatten)]
    pub extra: ExtraSettings,
}

/// yardstick: required documentation coverage.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct DocCoverageSettings {
    #[serde(default)]
    pub threshold: Option<f64>,
    #[serde(flatten)]
    pub extra: ExtraSettings,
}

/// roodi: check names mapped to their options, passed through untouched.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct ComplexitySettings {
    #[serde(flatten)]
    pub checks: ExtraSettings,
}

/// mutant: subject name and namespace to mutate.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct MutationSettings {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(flatten)]
    pub extra: ExtraSettings,
}

/// Paths probed for `stem` inside `config_dir`, in priority order.
pub fn settings_candidates(config_dir: &Path, stem: &str) -> Vec<PathBuf> {
    SETTINGS_CANDIDATES
        .iter()
        .map(|(ext, _)| config_dir.join(format!("{stem}.{ext}")))
        .collect()
}

pub fn load_settings_from_dir<T>(config_dir: &Path, stem: &str) -> Result<Option<LoadedSettings<T>>>
where
    T: DeserializeOwned,
{
    for (ext, format) in SETTINGS_CANDIDATES {
        let path = config_dir.join(format!("{stem}.{ext}"));
        if !path.exists() {
            continue;
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("reading {stem} settings at {}", path.display()))?;
        let data = match format {
            SettingsFormat::Yaml => parse_yaml_str(&content)
                .with_context(|| format!("parsing YAML settings at {}", path.display()))?,
            SettingsFormat::Toml => parse_toml_str(&content)
                .with_context(|| format!("parsing TOML settings at {}", path.display()))?,
        };
        tracing::debug!(tool = stem, path = %path.display(), "loaded tool settings");
        return Ok(Some(LoadedSettings {
            path,
            format: *format,
            data,
        }));
    }
    Ok(None)
}

pub(crate) fn parse_yaml_str<T: DeserializeOwned>(content: &str) -> Result<T> {
    Ok(serde_yaml::from_str(content)?)
}

pub(crate) fn parse_toml_str<T: DeserializeOwned>(content: &str) -> Result<T> {
    Ok(toml::from_str(content)?)
}
