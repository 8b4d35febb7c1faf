//! Configuration constants for deplens
//!
//! This module contains the constants used throughout the application.

use std::time::Duration;

/// Progress spinner configuration
pub mod progress {
    use super::*;

    /// Duration between spinner updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames shown while packages are resolved
    pub const SPINNER_FRAMES: &[&str] = &["🔍 ", "🔍·", "🔍•", "🔍●", "🔍•", "🔍·"];
}

/// Output formatting configuration
pub mod output {
    /// Default report format when not specified
    pub const DEFAULT_FORMAT: &str = "human";

    /// Default diagram dialect for `visualize`
    pub const DEFAULT_DIAGRAM_FORMAT: &str = "mermaid";
}

/// Settings file configuration
pub mod config {
    /// Settings file read when `--config` is not given
    pub const DEFAULT_CONFIG_FILE: &str = "deplens.toml";

    /// Table holding the user parameters
    pub const APP_SECTION: &str = "app";

    pub const MAX_PACKAGE_NAME_LEN: usize = 128;

    /// Schemes accepted for `remote-url` sources
    pub const REMOTE_SCHEMES: &[&str] = &["http", "https", "git"];
}

/// Repository source configuration
pub mod repository {
    /// Listing looked up when `repo_source` points at a directory
    pub const DIRECTORY_LISTING_FILE: &str = "dependencies.txt";
}

/// Glyphs of the indented dependency tree
pub mod tree {
    pub const ROOT_MARKER: &str = "📦 ";
    pub const BRANCH: &str = "├── ";
    pub const LAST_BRANCH: &str = "└── ";
    pub const VERTICAL: &str = "│   ";
    pub const SPACE: &str = "    ";
    pub const CIRCULAR_SUFFIX: &str = " [CIRCULAR]";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_constants() {
        assert_eq!(progress::TICK_INTERVAL, Duration::from_millis(100));
        assert!(!progress::SPINNER_FRAMES.is_empty());
    }

    #[test]
    fn test_tree_glyphs_share_width() {
        let width = |s: &str| s.chars().count();

        assert_eq!(width(tree::BRANCH), width(tree::LAST_BRANCH));
        assert_eq!(width(tree::VERTICAL), width(tree::SPACE));
        assert_eq!(width(tree::BRANCH), width(tree::SPACE));
    }
}
