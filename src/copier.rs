//! Artifact copier orchestration
//!
//! Drives the end-to-end flow for one coordinate:
//! 1. Diff the source and target version lists
//! 2. For each missing version, expand the primary to its sub-artifact set
//! 3. Resolve every coordinate against the source (absent sub-artifacts are
//!    skipped, an absent primary is fatal)
//! 4. Publish the resolved set to the target as one deploy batch
//!
//! Execution is strictly sequential: coordinates, versions and sub-artifacts
//! are processed one at a time, and no retry happens at this layer.
//! Re-running the tool recomputes the diff and naturally skips versions that
//! were already copied.

use console::style;

use crate::artifact::{self, ArtifactCoordinate, ArtifactType, default_sub_artifact_types};
use crate::error::{CopyError, Result};
use crate::progress::CopyProgress;
use crate::repository::{FetchOutcome, RepositoryEndpoint, RepositorySystem, ResolvedArtifact};

/// Copies artifacts from a source repository to a target repository
///
/// Generic over the repository system so the workflow can be exercised
/// without any transport.
pub struct Copier<S> {
    system: S,
    source: RepositoryEndpoint,
    target: RepositoryEndpoint,
    sub_artifact_types: Vec<ArtifactType>,
    verbose: bool,
}

impl<S: RepositorySystem> Copier<S> {
    pub fn new(system: S, source: RepositoryEndpoint, target: RepositoryEndpoint) -> Self {
        Self {
            system,
            source,
            target,
            sub_artifact_types: default_sub_artifact_types(),
            verbose: true,
        }
    }

    /// Replace the sub-artifact set travelling with each primary
    pub fn with_sub_artifact_types(mut self, types: Vec<ArtifactType>) -> Self {
        self.sub_artifact_types = types;
        self
    }

    /// Control the step-by-step trace output (default on)
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Copy every version of `coords` missing on the target
    ///
    /// Returns the coordinates that were transferred. Fails on the first
    /// fatal error; versions copied before the failure stay published.
    pub fn copy(&self, coords: &str) -> Result<Vec<ArtifactCoordinate>> {
        println!("{} {}", style("copy").green().bold(), coords);

        let missing = self.diff_versions(coords)?;
        if missing.is_empty() {
            self.trace(format!("{coords} is up to date"));
            return Ok(Vec::new());
        }

        let progress = CopyProgress::new(missing.len() as u64);
        for artifact in &missing {
            progress.start_version(&artifact.to_string());
            self.copy_artifact(artifact)?;
            progress.inc();
        }
        progress.finish();
        Ok(missing)
    }

    /// Transfer one fully qualified version: resolve then deploy
    pub fn copy_artifact(&self, artifact: &ArtifactCoordinate) -> Result<()> {
        println!("{} {}", style("copy").green().bold(), artifact);
        let resolved = self.resolve(artifact)?;
        self.deploy(&resolved)
    }

    /// Versions published on the source but absent on the target
    ///
    /// Pure list difference by exact string equality, in source listing
    /// order. No semantic-version comparison is performed: two spellings of
    /// the same release count as different versions.
    pub fn diff_versions(&self, coords: &str) -> Result<Vec<ArtifactCoordinate>> {
        self.trace(format!("resolve\t {coords}"));
        let key = ArtifactCoordinate::parse(coords)?;

        let source_versions = self.system.query_versions(&key, &self.source)?;
        self.trace(format!("source\t {source_versions:?}"));
        let target_versions = self.system.query_versions(&key, &self.target)?;
        self.trace(format!("target\t {target_versions:?}"));

        Ok(source_versions
            .iter()
            .filter(|version| !target_versions.contains(version))
            .map(|version| key.with_version(version))
            .collect())
    }

    /// Fetch the primary and its sub-artifacts from the source
    ///
    /// A sub-artifact the source never published is skipped with a warning;
    /// the primary being absent, or any transport failure, aborts the copy.
    pub fn resolve(&self, artifact: &ArtifactCoordinate) -> Result<Vec<ResolvedArtifact>> {
        self.trace(format!("resolve\t {artifact}"));
        let coordinates = artifact::expand(artifact, &self.sub_artifact_types);

        let mut resolved = Vec::with_capacity(coordinates.len());
        for (index, coordinate) in coordinates.iter().enumerate() {
            match self.system.fetch(coordinate, &self.source)? {
                FetchOutcome::Resolved(a) => resolved.push(a),
                FetchOutcome::Missing if index == 0 => {
                    return Err(CopyError::ArtifactNotFound {
                        artifact: coordinate.to_string(),
                        repository: self.source.id().to_string(),
                    });
                }
                FetchOutcome::Missing => {
                    // Not every release ships javadoc/sources/test jars
                    println!(
                        "{} {} not available, skipped",
                        style("warning:").yellow().bold(),
                        coordinate
                    );
                }
            }
        }
        Ok(resolved)
    }

    /// Publish a resolved set to the target as one batch
    fn deploy(&self, artifacts: &[ResolvedArtifact]) -> Result<()> {
        let names: Vec<String> = artifacts
            .iter()
            .map(|a| a.coordinate.to_string())
            .collect();
        self.trace(format!("deploy\t {names:?}"));
        self.system.publish(artifacts, &self.target)
    }

    fn trace(&self, message: impl AsRef<str>) {
        if self.verbose {
            println!("{}", style(message.as_ref()).dim());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::path::PathBuf;

    /// In-memory repository system recording every call
    struct MockSystem {
        /// Version lists per endpoint id; publish appends to the target's
        versions: RefCell<HashMap<String, Vec<String>>>,
        /// Coordinate strings that fetch as Missing
        missing: Vec<String>,
        /// Coordinate strings whose fetch fails with a transport error
        broken: Vec<String>,
        publish_rejected: bool,
        fetches: RefCell<Vec<String>>,
        publishes: RefCell<Vec<Vec<String>>>,
    }

    impl MockSystem {
        fn new(source_versions: &[&str], target_versions: &[&str]) -> Self {
            let mut versions = HashMap::new();
            versions.insert(
                "source".to_string(),
                source_versions.iter().map(ToString::to_string).collect(),
            );
            versions.insert(
                "target".to_string(),
                target_versions.iter().map(ToString::to_string).collect(),
            );
            Self {
                versions: RefCell::new(versions),
                missing: Vec::new(),
                broken: Vec::new(),
                publish_rejected: false,
                fetches: RefCell::new(Vec::new()),
                publishes: RefCell::new(Vec::new()),
            }
        }

        fn with_missing(mut self, coords: &[&str]) -> Self {
            self.missing = coords.iter().map(ToString::to_string).collect();
            self
        }

        fn with_broken(mut self, coords: &[&str]) -> Self {
            self.broken = coords.iter().map(ToString::to_string).collect();
            self
        }

        fn with_publish_rejected(mut self) -> Self {
            self.publish_rejected = true;
            self
        }
    }

    impl RepositorySystem for &MockSystem {
        fn query_versions(
            &self,
            coordinate: &ArtifactCoordinate,
            endpoint: &RepositoryEndpoint,
        ) -> Result<Vec<String>> {
            self.versions
                .borrow()
                .get(endpoint.id())
                .cloned()
                .ok_or_else(|| CopyError::VersionResolutionFailed {
                    coords: coordinate.to_string(),
                    repository: endpoint.id().to_string(),
                    reason: "no repository metadata for the coordinates".to_string(),
                })
        }

        fn fetch(
            &self,
            coordinate: &ArtifactCoordinate,
            _endpoint: &RepositoryEndpoint,
        ) -> Result<FetchOutcome> {
            let coords = coordinate.to_string();
            self.fetches.borrow_mut().push(coords.clone());

            if self.broken.contains(&coords) {
                return Err(CopyError::TransportFailed {
                    url: coords,
                    reason: "connection reset".to_string(),
                });
            }
            if self.missing.contains(&coords) {
                return Ok(FetchOutcome::Missing);
            }
            Ok(FetchOutcome::Resolved(ResolvedArtifact {
                coordinate: coordinate.clone(),
                file: PathBuf::from(format!("/staging/{coords}")),
            }))
        }

        fn publish(
            &self,
            artifacts: &[ResolvedArtifact],
            endpoint: &RepositoryEndpoint,
        ) -> Result<()> {
            if self.publish_rejected {
                return Err(CopyError::PublishFailed {
                    artifact: artifacts[0].coordinate.to_string(),
                    repository: endpoint.id().to_string(),
                    reason: "version already exists".to_string(),
                });
            }
            self.publishes.borrow_mut().push(
                artifacts
                    .iter()
                    .map(|a| a.coordinate.to_string())
                    .collect(),
            );
            let mut versions = self.versions.borrow_mut();
            let published = versions.entry(endpoint.id().to_string()).or_default();
            for artifact in artifacts {
                if let Some(version) = artifact.coordinate.version() {
                    if !published.iter().any(|v| v == version) {
                        published.push(version.to_string());
                    }
                }
            }
            Ok(())
        }
    }

    fn copier(system: &MockSystem) -> Copier<&MockSystem> {
        Copier::new(
            system,
            RepositoryEndpoint::new("source", "https://source.example.com", None),
            RepositoryEndpoint::new("target", "https://target.example.com", None),
        )
        .with_verbose(false)
    }

    #[test]
    fn diff_returns_versions_missing_on_target() {
        let system = MockSystem::new(&["1.0", "1.1", "1.2"], &["1.0"]);
        let missing = copier(&system).diff_versions("org.example:demo").unwrap();

        let coords: Vec<String> = missing.iter().map(ToString::to_string).collect();
        assert_eq!(
            coords,
            ["org.example:demo:jar:1.1", "org.example:demo:jar:1.2"]
        );
    }

    #[test]
    fn diff_preserves_source_listing_order() {
        let system = MockSystem::new(&["2.0", "1.0", "1.5"], &["1.0"]);
        let missing = copier(&system).diff_versions("org.example:demo").unwrap();
        let versions: Vec<&str> = missing.iter().filter_map(|c| c.version()).collect();
        assert_eq!(versions, ["2.0", "1.5"]);
    }

    #[test]
    fn diff_uses_exact_string_equality() {
        // 1.0 and 1.0.RELEASE may be the same release semantically; the
        // diff must still treat them as distinct strings
        let system = MockSystem::new(&["1.0", "1.0.RELEASE"], &["1.0"]);
        let missing = copier(&system).diff_versions("org.example:demo").unwrap();
        let versions: Vec<&str> = missing.iter().filter_map(|c| c.version()).collect();
        assert_eq!(versions, ["1.0.RELEASE"]);
    }

    #[test]
    fn diff_keeps_duplicate_source_listings() {
        // Plain list difference: every source occurrence not on the target
        // survives, and a version the target carries is dropped each time
        let system = MockSystem::new(&["1.0", "1.1", "1.1", "1.0"], &["1.0"]);
        let missing = copier(&system).diff_versions("org.example:demo").unwrap();
        let versions: Vec<&str> = missing.iter().filter_map(|c| c.version()).collect();
        assert_eq!(versions, ["1.1", "1.1"]);
    }

    #[test]
    fn diff_is_empty_when_in_sync() {
        let system = MockSystem::new(&["1.0", "1.1"], &["1.0", "1.1"]);
        assert!(copier(&system).diff_versions("org.example:demo").unwrap().is_empty());
    }

    #[test]
    fn diff_fails_without_metadata() {
        let system = MockSystem::new(&["1.0"], &[]);
        system.versions.borrow_mut().remove("target");

        let err = copier(&system).diff_versions("org.example:demo").unwrap_err();
        assert!(matches!(err, CopyError::VersionResolutionFailed { .. }));
    }

    #[test]
    fn copy_fetches_primary_and_sub_artifacts_per_missing_version() {
        // Javadoc/sources/test jars were never published; that is expected
        let system = MockSystem::new(&["1.0", "1.1", "1.2"], &["1.0"]).with_missing(&[
            "org.example:demo:jar:tests:1.1",
            "org.example:demo:jar:javadoc:1.1",
            "org.example:demo:jar:sources:1.1",
            "org.example:demo:jar:tests:1.2",
            "org.example:demo:jar:javadoc:1.2",
            "org.example:demo:jar:sources:1.2",
        ]);

        let copied = copier(&system).copy("org.example:demo").unwrap();
        assert_eq!(copied.len(), 2);

        // Primary + 4 default sub-artifact types, for each of the 2 versions
        assert_eq!(system.fetches.borrow().len(), 10);

        let publishes = system.publishes.borrow();
        assert_eq!(publishes.len(), 2);
        assert_eq!(
            publishes[0],
            ["org.example:demo:jar:1.1", "org.example:demo:pom:1.1"]
        );
        assert_eq!(
            publishes[1],
            ["org.example:demo:jar:1.2", "org.example:demo:pom:1.2"]
        );
    }

    #[test]
    fn copy_is_idempotent() {
        let system = MockSystem::new(&["1.0", "1.1"], &["1.0"]);
        let copier = copier(&system);

        let first = copier.copy("org.example:demo").unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(system.publishes.borrow().len(), 1);

        // The target now lists 1.1; a second run finds nothing to copy
        let second = copier.copy("org.example:demo").unwrap();
        assert!(second.is_empty());
        assert_eq!(system.publishes.borrow().len(), 1);
    }

    #[test]
    fn missing_primary_is_fatal() {
        let system =
            MockSystem::new(&["1.0"], &[]).with_missing(&["org.example:demo:jar:1.0"]);
        let artifact = ArtifactCoordinate::parse("org.example:demo:1.0").unwrap();

        let err = copier(&system).copy_artifact(&artifact).unwrap_err();
        assert!(matches!(err, CopyError::ArtifactNotFound { .. }));
        assert!(system.publishes.borrow().is_empty());
    }

    #[test]
    fn broken_fetch_aborts_before_deploy() {
        // A transport failure on any sub-artifact is fatal, unlike absence
        let system =
            MockSystem::new(&["1.0"], &[]).with_broken(&["org.example:demo:pom:1.0"]);
        let artifact = ArtifactCoordinate::parse("org.example:demo:1.0").unwrap();

        let err = copier(&system).copy_artifact(&artifact).unwrap_err();
        assert!(matches!(err, CopyError::TransportFailed { .. }));
        assert!(system.publishes.borrow().is_empty());
    }

    #[test]
    fn publish_rejection_propagates() {
        let system = MockSystem::new(&["1.0", "1.1"], &["1.0"]).with_publish_rejected();
        let err = copier(&system).copy("org.example:demo").unwrap_err();
        assert!(matches!(err, CopyError::PublishFailed { .. }));
    }

    #[test]
    fn custom_sub_artifact_types_replace_the_default_set() {
        let system = MockSystem::new(&["1.0"], &[]);
        let copier = copier(&system).with_sub_artifact_types(Vec::new());
        copier.copy("org.example:demo").unwrap();

        // Only the primary is fetched when no types are configured
        assert_eq!(*system.fetches.borrow(), ["org.example:demo:jar:1.0"]);
    }

    #[test]
    fn copy_rejects_invalid_coordinates() {
        let system = MockSystem::new(&[], &[]);
        let err = copier(&system).copy("not-coordinates").unwrap_err();
        assert!(matches!(err, CopyError::InvalidCoordinates { .. }));
    }
}
