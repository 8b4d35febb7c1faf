//! # Repository Module
//!
//! The graph engine only needs one capability from the outside world: given a
//! package, name its direct dependencies. That capability is the
//! [`DependencyResolver`] trait.
//!
//! - **FixtureRepository**: resolver backed by a plain-text listing with one
//!   `NAME: DEP1 DEP2 ...` line per package
//! - **load_repository**: turns a validated repository source into a resolver
//!
//! Any closure `Fn(&str) -> Result<Vec<String>, ResolveError>` is a resolver
//! as well, which keeps the graph builder easy to drive from tests.
//!
//! ## Example
//!
//! ```
//! use deplens::error::ResolveError;
//! use deplens::repository::{DependencyResolver, FixtureRepository};
//!
//! let repo = FixtureRepository::parse("A: B C\nB:\nC: B\n");
//! assert_eq!(repo.resolve("A").unwrap(), vec!["B", "C"]);
//! assert!(matches!(repo.resolve("Z"), Err(ResolveError::NotFound { .. })));
//! ```

mod fixture;

use std::path::Path;

use tracing::debug;

pub use fixture::FixtureRepository;

use crate::config::{AppSettings, RepoMode};
use crate::constants::repository::DIRECTORY_LISTING_FILE;
use crate::error::{DepLensError, ResolveError};
use crate::graph::PackageId;

/// Lookup of a package's direct dependencies
///
/// Implementations must answer consistently within one graph build: the same
/// package always yields the same dependency list.
pub trait DependencyResolver {
    fn resolve(&self, package: &str) -> Result<Vec<PackageId>, ResolveError>;
}

impl<F> DependencyResolver for F
where
    F: Fn(&str) -> Result<Vec<PackageId>, ResolveError>,
{
    fn resolve(&self, package: &str) -> Result<Vec<PackageId>, ResolveError> {
        self(package)
    }
}

/// Open the repository named by the settings and return a resolver for it
pub fn load_repository(settings: &AppSettings) -> Result<Box<dyn DependencyResolver>, DepLensError> {
    match settings.test_repo_mode {
        RepoMode::LocalPath => {
            let listing = local_listing_path(Path::new(&settings.repo_source))?;
            debug!(path = %listing.display(), "loading dependency listing");
            Ok(Box::new(FixtureRepository::from_file(&listing)?))
        }
        RepoMode::RemoteUrl => Err(DepLensError::UnsupportedSource {
            source_locator: settings.repo_source.clone(),
            reason: "fetching remote repositories is not supported".to_string(),
        }),
    }
}

fn local_listing_path(source: &Path) -> Result<std::path::PathBuf, DepLensError> {
    if source.is_file() {
        return Ok(source.to_path_buf());
    }

    if source.is_dir() {
        let candidate = source.join(DIRECTORY_LISTING_FILE);
        if candidate.is_file() {
            return Ok(candidate);
        }

        return Err(DepLensError::UnsupportedSource {
            source_locator: source.display().to_string(),
            reason: format!("directory does not contain a '{DIRECTORY_LISTING_FILE}' listing"),
        });
    }

    Err(DepLensError::UnsupportedSource {
        source_locator: source.display().to_string(),
        reason: "path does not exist".to_string(),
    })
}
