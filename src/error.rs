use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid TOML syntax in '{file}'")]
#[diagnostic(
    code(deplens::config_parse_error),
    help("Check the TOML syntax near the highlighted position")
)]
pub struct ConfigParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: toml::de::Error,
}

/// Failure of a single dependency lookup.
///
/// The graph builder recovers from these by treating the package as a leaf
/// and recording an advisory, so they are never fatal on their own.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("package '{package}' was not found in the repository")]
    NotFound { package: String },

    #[error("failed to resolve dependencies of '{package}': {message}")]
    Failed { package: String, message: String },
}

impl ResolveError {
    pub fn package(&self) -> &str {
        match self {
            ResolveError::NotFound { package } | ResolveError::Failed { package, .. } => package,
        }
    }
}

#[derive(Error, Debug, Diagnostic)]
pub enum DepLensError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(deplens::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    ConfigParseError(Box<ConfigParseError>),

    #[error("JSON serialization error")]
    #[diagnostic(
        code(deplens::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(deplens::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(deplens::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(deplens::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },

    #[error("Configuration validation failed:\n{}", format_problems(.problems))]
    #[diagnostic(
        code(deplens::config_invalid),
        help("Fix the listed parameters in the [app] table or override them on the command line")
    )]
    InvalidConfiguration { problems: Vec<String> },

    #[error("Root package '{package}' is not present in the repository")]
    #[diagnostic(
        code(deplens::unknown_root),
        help("Check package_name against the packages declared by repo_source")
    )]
    UnknownRoot { package: String },

    #[error("Package '{package}' is not part of the dependency graph")]
    #[diagnostic(
        code(deplens::unknown_node),
        help("Only packages reachable from the root package can be queried")
    )]
    UnknownNode { package: String },

    #[error("Unsupported repository source '{source_locator}': {reason}")]
    #[diagnostic(
        code(deplens::unsupported_source),
        help("Point repo_source at a local dependency listing (NAME: DEP1 DEP2 ...)")
    )]
    UnsupportedSource {
        source_locator: String,
        reason: String,
    },
}

fn format_problems(problems: &[String]) -> String {
    problems
        .iter()
        .map(|p| format!(" - {p}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use std::io;

    use miette::NamedSource;

    use super::*;

    #[test]
    fn test_config_parse_error_display() {
        let source_code = "invalid = toml content";
        let toml_err = toml::from_str::<toml::Value>(source_code).unwrap_err();

        let error = ConfigParseError {
            file: "deplens.toml".to_string(),
            source_code: NamedSource::new("deplens.toml", source_code.to_string()),
            span: Some((10, 4).into()),
            source: toml_err,
        };

        assert_eq!(error.to_string(), "Invalid TOML syntax in 'deplens.toml'");
    }

    #[test]
    fn test_file_read_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = DepLensError::FileReadError {
            path: PathBuf::from("/tmp/missing.txt"),
            source: io_err,
        };

        assert_eq!(error.to_string(), "Failed to read file '/tmp/missing.txt'");
    }

    #[test]
    fn test_invalid_configuration_lists_every_problem() {
        let error = DepLensError::InvalidConfiguration {
            problems: vec![
                "Missing required parameter: package_name".to_string(),
                "repo_source cannot be empty".to_string(),
            ],
        };

        assert_eq!(
            error.to_string(),
            "Configuration validation failed:\n - Missing required parameter: package_name\n - \
             repo_source cannot be empty"
        );
    }

    #[test]
    fn test_unknown_node_names_the_target() {
        let error = DepLensError::UnknownNode {
            package: "Z".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Package 'Z' is not part of the dependency graph"
        );
    }

    #[test]
    fn test_error_codes() {
        use miette::Diagnostic;

        let error = DepLensError::UnknownRoot {
            package: "A".to_string(),
        };
        assert!(error.code().is_some());
        assert!(error.help().is_some());
    }

    #[test]
    fn test_resolve_error_package() {
        let not_found = ResolveError::NotFound {
            package: "B".to_string(),
        };
        let failed = ResolveError::Failed {
            package: "C".to_string(),
            message: "malformed manifest".to_string(),
        };

        assert_eq!(not_found.package(), "B");
        assert_eq!(failed.package(), "C");
        assert_eq!(
            failed.to_string(),
            "failed to resolve dependencies of 'C': malformed manifest"
        );
    }

    #[test]
    fn test_error_conversion_from_io() {
        let io_err = io::Error::other("some io error");
        let err: DepLensError = io_err.into();

        match err {
            DepLensError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
    }
}
