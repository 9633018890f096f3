//! Output configuration loaded from `descent.toml`.

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

use descent_syntax::RenderOptions;

pub(crate) const CONFIG_FILES: &[&str] = &["descent.toml", ".descent.toml"];

/// How `descent parse` prints its result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented commence/accept/finish dump.
    #[default]
    Events,
    /// The rowan syntax tree built from the events.
    Tree,
}

/// Output settings, after the config file and command-line flags are merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub indent: usize,
    pub show_lines: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        let render = RenderOptions::default();
        Self {
            format: OutputFormat::default(),
            indent: render.indent,
            show_lines: render.show_lines,
        }
    }
}

impl OutputConfig {
    /// Applies command-line overrides on top of the configured values.
    pub fn with_overrides(
        mut self,
        format: Option<OutputFormat>,
        indent: Option<usize>,
        lines: bool,
    ) -> Self {
        if let Some(format) = format {
            self.format = format;
        }
        if let Some(indent) = indent {
            self.indent = indent;
        }
        self.show_lines |= lines;
        self
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            indent: self.indent,
            show_lines: self.show_lines,
        }
    }
}

/// Project configuration for the `descent` driver.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Config file path (if one was used).
    pub config_path: Option<PathBuf>,
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from the first config file found in `root`.
    ///
    /// A missing, unreadable or malformed file yields the defaults.
    pub fn load(root: &Path) -> Self {
        let Some(path) = find_config_file(root) else {
            return Config::default();
        };
        let Ok(contents) = std::fs::read_to_string(&path) else {
            warn!("Failed to read descent config at {}", path.display());
            return Config::base(Some(path));
        };
        Config::from_contents(Some(path), &contents)
    }

    /// Load an explicitly requested config file. Unlike [`Config::load`],
    /// every failure is an error.
    pub fn load_explicit(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let parsed: ConfigFile = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        Ok(Config::from_file(Some(path.to_path_buf()), parsed))
    }

    pub fn from_contents(config_path: Option<PathBuf>, contents: &str) -> Self {
        match toml::from_str(contents) {
            Ok(parsed) => Config::from_file(config_path, parsed),
            Err(err) => {
                if let Some(path) = &config_path {
                    warn!("Failed to parse descent config at {}: {err}", path.display());
                } else {
                    warn!("Failed to parse descent config: {err}");
                }
                Config::base(config_path)
            }
        }
    }

    fn base(config_path: Option<PathBuf>) -> Self {
        Config {
            config_path,
            output: OutputConfig::default(),
        }
    }

    fn from_file(config_path: Option<PathBuf>, parsed: ConfigFile) -> Self {
        let mut config = Config::base(config_path);
        let section = parsed.output;
        if let Some(format) = section.format {
            config.output.format = format;
        }
        if let Some(indent) = section.indent {
            config.output.indent = indent;
        }
        if let Some(show_lines) = section.show_lines {
            config.output.show_lines = show_lines;
        }
        config
    }
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    output: OutputSection,
}

#[derive(Debug, Default, Deserialize)]
struct OutputSection {
    format: Option<OutputFormat>,
    indent: Option<usize>,
    show_lines: Option<bool>,
}

pub(crate) fn find_config_file(root: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| root.join(name))
        .find(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_dir(prefix: &str) -> PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("{prefix}-{stamp}"));
        fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    #[test]
    fn defaults_match_render_options() {
        let config = Config::from_contents(None, "");
        assert_eq!(config.output.format, OutputFormat::Events);
        assert_eq!(config.output.render_options(), RenderOptions::default());
    }

    #[test]
    fn reads_output_section() {
        let config = Config::from_contents(
            None,
            r#"
[output]
format = "tree"
indent = 4
show_lines = true
"#,
        );
        assert_eq!(
            config.output,
            OutputConfig {
                format: OutputFormat::Tree,
                indent: 4,
                show_lines: true,
            }
        );
    }

    #[test]
    fn partial_section_keeps_defaults() {
        let config = Config::from_contents(None, "[output]\nshow_lines = true\n");
        assert_eq!(config.output.format, OutputFormat::Events);
        assert_eq!(config.output.indent, 2);
        assert!(config.output.show_lines);
    }

    #[test]
    fn malformed_contents_fall_back_to_defaults() {
        let path = PathBuf::from("descent.toml");
        let config = Config::from_contents(Some(path.clone()), "[output]\nformat = \"xml\"\n");
        assert_eq!(config.config_path, Some(path));
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn flags_override_file() {
        let output = OutputConfig {
            format: OutputFormat::Tree,
            indent: 4,
            show_lines: false,
        }
        .with_overrides(Some(OutputFormat::Events), None, true);

        assert_eq!(output.format, OutputFormat::Events);
        assert_eq!(output.indent, 4);
        assert!(output.show_lines);
    }

    #[test]
    fn load_finds_hidden_config_file() {
        let root = temp_dir("descent-config-hidden");
        fs::write(root.join(".descent.toml"), "[output]\nindent = 8\n").expect("write config");

        let config = Config::load(&root);
        assert_eq!(config.config_path, Some(root.join(".descent.toml")));
        assert_eq!(config.output.indent, 8);

        fs::remove_dir_all(root).ok();
    }

    #[test]
    fn load_without_config_file() {
        let root = temp_dir("descent-config-missing");
        let config = Config::load(&root);
        assert_eq!(config.config_path, None);
        assert_eq!(config.output, OutputConfig::default());
        fs::remove_dir_all(root).ok();
    }

    #[test]
    fn explicit_config_errors_are_fatal() {
        let root = temp_dir("descent-config-explicit");
        let missing = root.join("absent.toml");
        assert!(Config::load_explicit(&missing).is_err());

        let broken = root.join("broken.toml");
        fs::write(&broken, "[output]\nindent = \"wide\"\n").expect("write config");
        let err = Config::load_explicit(&broken).expect_err("malformed config");
        assert!(err.to_string().contains("failed to parse config"));

        fs::remove_dir_all(root).ok();
    }
}
