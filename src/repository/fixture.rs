//! Plain-text dependency listings
//!
//! ```text
//! # comment
//! A: B C
//! B: D
//! C:
//! D:
//! ```

use std::collections::HashMap;
use std::path::Path;

use tracing::trace;

use super::DependencyResolver;
use crate::error::{DepLensError, ResolveError};
use crate::graph::{DependencyRecord, PackageId};

/// Resolver over an in-memory `NAME: DEP1 DEP2 ...` listing
#[derive(Debug, Clone, Default)]
pub struct FixtureRepository {
    packages: HashMap<PackageId, Vec<PackageId>>,
}

impl FixtureRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a listing
    ///
    /// Blank lines and `#` comments are ignored, lines without a `:` or with
    /// whitespace inside the name are skipped, and a repeated package name
    /// replaces the earlier entry.
    pub fn parse(content: &str) -> Self {
        let mut repo = Self::new();

        for (line_no, raw_line) in content.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((name, deps)) = line.split_once(':') else {
                trace!(line = line_no + 1, "skipping listing line without ':'");
                continue;
            };

            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            if name.contains(char::is_whitespace) {
                trace!(
                    line = line_no + 1,
                    package = name,
                    "skipping listing line with a multi-word name"
                );
                continue;
            }

            repo.insert(DependencyRecord::new(
                name,
                deps.split_whitespace().map(str::to_string).collect(),
            ));
        }

        repo
    }

    pub fn from_file(path: &Path) -> Result<Self, DepLensError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| DepLensError::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(Self::parse(&content))
    }

    pub fn insert(&mut self, record: DependencyRecord) {
        self.packages.insert(record.package, record.dependencies);
    }

    pub fn contains(&self, package: &str) -> bool {
        self.packages.contains_key(package)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl DependencyResolver for FixtureRepository {
    fn resolve(&self, package: &str) -> Result<Vec<PackageId>, ResolveError> {
        self.packages
            .get(package)
            .cloned()
            .ok_or_else(|| ResolveError::NotFound {
                package: package.to_string(),
            })
    }
}

impl FromIterator<DependencyRecord> for FixtureRepository {
    fn from_iter<I: IntoIterator<Item = DependencyRecord>>(iter: I) -> Self {
        let mut repo = Self::new();
        for record in iter {
            repo.insert(record);
        }
        repo
    }
}
