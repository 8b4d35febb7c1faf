//! Run parameters loaded from the settings file
//!
//! ```toml
//! [app]
//! package_name = "Newtonsoft.Json"
//! repo_source = "./fixtures/dependencies.txt"
//! test_repo_mode = "local-path"
//! output_mode = "ascii-tree"
//! ```

use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use miette::{NamedSource, SourceSpan};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::constants::config::{APP_SECTION, MAX_PACKAGE_NAME_LEN, REMOTE_SCHEMES};
use crate::error::{ConfigParseError, DepLensError};

/// Where the dependency listing comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepoMode {
    LocalPath,
    RemoteUrl,
}

impl RepoMode {
    pub const ALL: [RepoMode; 2] = [RepoMode::LocalPath, RepoMode::RemoteUrl];

    pub fn as_str(&self) -> &'static str {
        match self {
            RepoMode::LocalPath => "local-path",
            RepoMode::RemoteUrl => "remote-url",
        }
    }

    /// Case-insensitive match ignoring surrounding whitespace
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim().to_lowercase();
        Self::ALL.into_iter().find(|mode| mode.as_str() == value)
    }
}

impl fmt::Display for RepoMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the `render` command presents the graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputMode {
    AsciiTree,
    List,
}

impl OutputMode {
    pub const ALL: [OutputMode; 2] = [OutputMode::AsciiTree, OutputMode::List];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::AsciiTree => "ascii-tree",
            OutputMode::List => "list",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim().to_lowercase();
        Self::ALL.into_iter().find(|mode| mode.as_str() == value)
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unvalidated parameters, either from the `[app]` table or from the command
/// line
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawAppSettings {
    pub package_name: Option<String>,
    pub repo_source: Option<String>,
    pub test_repo_mode: Option<String>,
    pub output_mode: Option<String>,
}

impl RawAppSettings {
    /// Every parameter is present
    pub fn is_complete(&self) -> bool {
        self.package_name.is_some()
            && self.repo_source.is_some()
            && self.test_repo_mode.is_some()
            && self.output_mode.is_some()
    }

    /// Values from `overrides` win over the ones in `self`
    pub fn overridden_by(self, overrides: &RawAppSettings) -> Self {
        Self {
            package_name: overrides.package_name.clone().or(self.package_name),
            repo_source: overrides.repo_source.clone().or(self.repo_source),
            test_repo_mode: overrides.test_repo_mode.clone().or(self.test_repo_mode),
            output_mode: overrides.output_mode.clone().or(self.output_mode),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SettingsFile {
    app: Option<RawAppSettings>,
}

/// Validated run parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppSettings {
    pub package_name: String,
    /// Absolute path for `local-path`, URL for `remote-url`
    pub repo_source: String,
    pub test_repo_mode: RepoMode,
    pub output_mode: OutputMode,
}

impl AppSettings {
    /// Read the settings file at `path` and apply `overrides`
    ///
    /// The file may be absent when the overrides supply every parameter.
    pub fn load(path: &Path, overrides: &RawAppSettings) -> Result<Self, DepLensError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound && overrides.is_complete() => {
                debug!(path = %path.display(), "settings file absent, using command line values");
                return Self::validate(overrides.clone());
            }
            Err(e) => {
                return Err(DepLensError::FileReadError {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        };

        Self::from_toml_str(&content, &path.display().to_string(), overrides)
    }

    /// Parse settings from TOML text; `file` names the source in diagnostics
    pub fn from_toml_str(
        content: &str,
        file: &str,
        overrides: &RawAppSettings,
    ) -> Result<Self, DepLensError> {
        let parsed: SettingsFile = toml::from_str(content).map_err(|e| {
            let span = e
                .span()
                .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));

            DepLensError::ConfigParseError(Box::new(ConfigParseError {
                file: file.to_string(),
                source_code: NamedSource::new(file, content.to_string()),
                span,
                source: e,
            }))
        })?;

        let raw = match parsed.app {
            Some(app) => app.overridden_by(overrides),
            None if overrides.is_complete() => overrides.clone(),
            None => {
                return Err(DepLensError::InvalidConfiguration {
                    problems: vec![format!(
                        "Missing section [{APP_SECTION}] in config. All parameters must be under \
                         this section."
                    )],
                });
            }
        };

        Self::validate(raw)
    }

    /// Check every parameter and report all problems at once
    pub fn validate(raw: RawAppSettings) -> Result<Self, DepLensError> {
        let (Some(package_name), Some(repo_source), Some(test_repo_mode), Some(output_mode)) = (
            raw.package_name.as_deref(),
            raw.repo_source.as_deref(),
            raw.test_repo_mode.as_deref(),
            raw.output_mode.as_deref(),
        ) else {
            let problems = [
                ("package_name", raw.package_name.is_none()),
                ("repo_source", raw.repo_source.is_none()),
                ("test_repo_mode", raw.test_repo_mode.is_none()),
                ("output_mode", raw.output_mode.is_none()),
            ]
            .into_iter()
            .filter(|(_, missing)| *missing)
            .map(|(key, _)| format!("Missing required parameter: {key}"))
            .collect();
            return Err(DepLensError::InvalidConfiguration { problems });
        };

        let mut problems = Vec::new();

        let package_name = package_name.trim();
        if !is_valid_package_name(package_name) {
            problems.push(format!(
                "package_name is invalid. Allowed: letters, numbers, '.', '_', '-'; must start \
                 with alnum; length 1..{MAX_PACKAGE_NAME_LEN}."
            ));
        }

        let repo_mode = RepoMode::parse(test_repo_mode);
        if repo_mode.is_none() {
            problems.push(format!(
                "test_repo_mode must be one of {}; got '{}'.",
                choices(&RepoMode::ALL.map(|m| m.as_str())),
                shown(test_repo_mode)
            ));
        }

        let out_mode = OutputMode::parse(output_mode);
        if out_mode.is_none() {
            problems.push(format!(
                "output_mode must be one of {}; got '{}'.",
                choices(&OutputMode::ALL.map(|m| m.as_str())),
                shown(output_mode)
            ));
        }

        let repo_source = repo_source.trim();
        let normalized_source = if repo_source.is_empty() {
            problems.push("repo_source cannot be empty".to_string());
            None
        } else {
            match repo_mode {
                Some(RepoMode::LocalPath) => {
                    let path = expand_home(repo_source);
                    match std::fs::canonicalize(&path) {
                        Ok(absolute) => Some(absolute.display().to_string()),
                        Err(_) => {
                            problems.push(format!(
                                "repo_source path does not exist (test_repo_mode=local-path): {}",
                                path.display()
                            ));
                            None
                        }
                    }
                }
                Some(RepoMode::RemoteUrl) => {
                    if is_valid_url(repo_source) {
                        Some(repo_source.to_string())
                    } else {
                        problems.push(format!(
                            "repo_source is not a valid URL (test_repo_mode=remote-url): \
                             {repo_source}"
                        ));
                        None
                    }
                }
                // An unknown mode is already reported above
                None => None,
            }
        };

        match (repo_mode, out_mode, normalized_source) {
            (Some(test_repo_mode), Some(output_mode), Some(repo_source)) if problems.is_empty() => {
                Ok(AppSettings {
                    package_name: package_name.to_string(),
                    repo_source,
                    test_repo_mode,
                    output_mode,
                })
            }
            _ => Err(DepLensError::InvalidConfiguration { problems }),
        }
    }

    /// Parameters as `(key, value)` pairs in display order
    pub fn parameters(&self) -> [(&'static str, String); 4] {
        [
            ("package_name", self.package_name.clone()),
            ("repo_source", self.repo_source.clone()),
            ("test_repo_mode", self.test_repo_mode.to_string()),
            ("output_mode", self.output_mode.to_string()),
        ]
    }
}

/// `[A-Za-z0-9][A-Za-z0-9._-]{0,127}`, matched against the whole name
static PACKAGE_NAME: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]{0,127}$").ok());

fn is_valid_package_name(name: &str) -> bool {
    PACKAGE_NAME
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(name))
}

fn is_valid_url(source: &str) -> bool {
    let Ok(url) = Url::parse(source) else {
        return false;
    };

    REMOTE_SCHEMES.contains(&url.scheme()) && url.host_str().is_some_and(|host| !host.is_empty())
}

fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

fn choices(values: &[&str]) -> String {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let quoted: Vec<String> = sorted.iter().map(|v| format!("'{v}'")).collect();
    format!("[{}]", quoted.join(", "))
}

fn shown(value: &str) -> String {
    let value = value.trim().to_lowercase();
    if value.is_empty() {
        "<empty>".to_string()
    } else {
        value
    }
}
