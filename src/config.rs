use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level Yuletide configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct YuletideConfig {
    /// Year range to search.
    #[serde(default)]
    pub range: RangeToml,

    /// Finder settings.
    #[serde(default)]
    pub finder: FinderToml,

    /// Analysis settings.
    #[serde(default)]
    pub analysis: AnalysisToml,

    /// Export settings.
    #[serde(default)]
    pub export: ExportToml,
}

impl YuletideConfig {
    /// Reads and parses a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse config TOML: {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RangeToml {
    #[serde(default = "default_start")]
    pub start: i64,
    #[serde(default = "default_end")]
    pub end: i64,
}

impl Default for RangeToml {
    fn default() -> Self {
        Self {
            start: default_start(),
            end: default_end(),
        }
    }
}

fn default_start() -> i64 {
    2000
}
fn default_end() -> i64 {
    2100
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FinderToml {
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default = "default_true")]
    pub cache: bool,
}

impl Default for FinderToml {
    fn default() -> Self {
        Self {
            method: default_method(),
            cache: true,
        }
    }
}

fn default_method() -> String {
    "optimized".to_string()
}
fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct AnalysisToml {
    /// Defaults to the current calendar year when unset.
    #[serde(default)]
    pub reference_year: Option<i64>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ExportToml {
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let cfg: YuletideConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.range.start, 2000);
        assert_eq!(cfg.range.end, 2100);
        assert_eq!(cfg.finder.method, "optimized");
        assert!(cfg.finder.cache);
        assert!(cfg.analysis.reference_year.is_none());
        assert!(cfg.export.format.is_none());
    }

    #[test]
    fn test_full_config() {
        let cfg: YuletideConfig = toml::from_str(
            r#"
            [range]
            start = 1970
            end = 2017

            [finder]
            method = "direct"
            cache = false

            [analysis]
            reference_year = 2030

            [export]
            format = "csv"
            path = "out.csv"
            "#,
        )
        .unwrap();
        assert_eq!((cfg.range.start, cfg.range.end), (1970, 2017));
        assert_eq!(cfg.finder.method, "direct");
        assert!(!cfg.finder.cache);
        assert_eq!(cfg.analysis.reference_year, Some(2030));
        assert_eq!(cfg.export.format.as_deref(), Some("csv"));
        assert_eq!(cfg.export.path, Some(PathBuf::from("out.csv")));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = toml::from_str::<YuletideConfig>("[range]\nbegin = 1\n").unwrap_err();
        assert!(err.to_string().contains("begin"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[range]\nend = 2050").unwrap();
        let cfg = YuletideConfig::load(file.path()).unwrap();
        assert_eq!(cfg.range.start, 2000);
        assert_eq!(cfg.range.end, 2050);
    }

    #[test]
    fn test_load_missing_file() {
        let err = YuletideConfig::load(Path::new("/nonexistent/yuletide.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config"));
    }
}
