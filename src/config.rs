use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::color::parse_color;
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Config {
    pub typeahead: TypeaheadConfig,
    pub counter: CounterConfig,
    pub flipper: FlipperConfig,
    pub notes: NotesConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TypeaheadConfig {
    pub candidates: Vec<String>,
    /// When true, the clear control also collapses the result panel.
    pub clear_collapses_panel: bool,
}

impl Default for TypeaheadConfig {
    fn default() -> Self {
        Self {
            candidates: [
                "#BlackLivesMatter",
                "#LoveIsLove",
                "caturday",
                "puppies",
                "koala",
                "otter",
                "rabbits",
                "cute cat",
                "cute dog",
            ]
            .map(String::from)
            .to_vec(),
            clear_collapses_panel: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CounterConfig {
    pub positive_color: String,
    pub negative_color: String,
    pub neutral_color: String,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            positive_color: "green".to_string(),
            negative_color: "red".to_string(),
            neutral_color: "#222".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FlipperConfig {
    pub colors: Vec<String>,
    pub seed: Option<u64>,
}

impl Default for FlipperConfig {
    fn default() -> Self {
        Self {
            colors: ["green", "red", "rgba(133,122,200)", "#f15025"]
                .map(String::from)
                .to_vec(),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NotesConfig {
    pub default_color: String,
    pub default_size: u16,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            default_color: "#f15025".to_string(),
            default_size: 16,
        }
    }
}

impl NotesConfig {
    pub const MAX_SIZE: u16 = 200;
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    pub file: Option<PathBuf>,
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> AppResult<Self> {
        let Some(path) = default_config_path() else {
            return Ok(Self::default());
        };
        Self::load_from_path(path)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        if !path.is_file() {
            return Err(AppError::invalid_argument(format!(
                "config path is not a regular file: {}",
                path.display()
            )));
        }

        let raw = fs::read_to_string(path).map_err(|source| {
            AppError::io_with_context(source, format!("failed to read config: {}", path.display()))
        })?;
        let parsed = toml::from_str::<Self>(&raw).map_err(|source| {
            AppError::invalid_argument(format!(
                "failed to parse config {}: {source}",
                path.display()
            ))
        })?;
        parsed.validated()
    }

    fn validated(mut self) -> AppResult<Self> {
        if self.flipper.colors.is_empty() {
            self.flipper.colors = FlipperConfig::default().colors;
        }
        for color in &self.flipper.colors {
            require_color("flipper.colors", color)?;
        }
        require_color("counter.positive_color", &self.counter.positive_color)?;
        require_color("counter.negative_color", &self.counter.negative_color)?;
        require_color("counter.neutral_color", &self.counter.neutral_color)?;
        require_color("notes.default_color", &self.notes.default_color)?;
        self.notes.default_size = self.notes.default_size.clamp(1, NotesConfig::MAX_SIZE);
        Ok(self)
    }
}

fn require_color(field: &str, value: &str) -> AppResult<()> {
    if parse_color(value).is_none() {
        return Err(AppError::invalid_argument(format!(
            "{field}: unrecognized color {value:?}"
        )));
    }
    Ok(())
}

pub fn default_config_path() -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os("PWG_CONFIG_PATH")
        && !explicit.is_empty()
    {
        return Some(PathBuf::from(explicit));
    }

    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME")
        && !xdg.is_empty()
    {
        return Some(PathBuf::from(xdg).join("pwg").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME")
        && !home.is_empty()
    {
        return Some(
            PathBuf::from(home)
                .join(".config")
                .join("pwg")
                .join("config.toml"),
        );
    }
    if let Some(appdata) = std::env::var_os("APPDATA")
        && !appdata.is_empty()
    {
        return Some(PathBuf::from(appdata).join("pwg").join("config.toml"));
    }
    None
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::process;
    use std::time::{SystemTime, UNIX_EPOCH};

    use crate::error::AppError;

    use super::{Config, FlipperConfig};

    fn unique_temp_path(suffix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("pwg_config_{suffix}_{}_{}", process::id(), nanos));
        path
    }

    #[test]
    fn load_from_path_returns_defaults_for_missing_file() {
        let missing = unique_temp_path("missing.toml");
        let config = Config::load_from_path(&missing).expect("missing config should fallback");
        assert_eq!(config, Config::default());
        assert_eq!(config.typeahead.candidates.len(), 9);
        assert!(config.typeahead.clear_collapses_panel);
    }

    #[test]
    fn load_from_path_applies_partial_overrides_and_sanitizes() {
        let path = unique_temp_path("custom.toml");
        fs::write(
            &path,
            r##"
            [typeahead]
            candidates = ["koala", "koala", "otter"]
            clear_collapses_panel = false

            [flipper]
            colors = []
            seed = 9

            [notes]
            default_size = 0

            [log]
            level = "debug"
            "##,
        )
        .expect("config file should be written");

        let config = Config::load_from_path(&path).expect("config should parse");
        assert_eq!(config.typeahead.candidates, vec!["koala", "koala", "otter"]);
        assert!(!config.typeahead.clear_collapses_panel);
        assert_eq!(config.flipper.colors, FlipperConfig::default().colors);
        assert_eq!(config.flipper.seed, Some(9));
        assert_eq!(config.notes.default_size, 1);
        assert_eq!(config.notes.default_color, "#f15025");
        assert_eq!(config.counter.neutral_color, "#222");
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.log.file, None);

        fs::remove_file(&path).expect("config file should be removed");
    }

    #[test]
    fn load_from_path_rejects_unknown_colors() {
        let path = unique_temp_path("bad_color.toml");
        fs::write(
            &path,
            r#"
            [counter]
            positive_color = "definitely-not-a-color"
            "#,
        )
        .expect("config file should be written");

        let err = Config::load_from_path(&path).expect_err("bad color should be rejected");
        assert!(matches!(err, AppError::InvalidArgument(_)));
        assert!(err.to_string().contains("counter.positive_color"));

        fs::remove_file(&path).expect("config file should be removed");
    }

    #[test]
    fn load_from_path_rejects_directories() {
        let dir = std::env::temp_dir();
        assert!(Config::load_from_path(&dir).is_err());
    }
}
