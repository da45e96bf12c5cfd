//! Error types and handling for mvncopy
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! A missing sub-artifact is not an error at all (the fetch operation returns
//! a typed outcome instead); the variants here are the fatal failures that
//! abort the current coordinate or the whole run.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for mvncopy operations
#[derive(Error, Diagnostic, Debug)]
pub enum CopyError {
    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(mvncopy::config::not_found),
        help("mvncopy reads its endpoints and artifact list from a YAML file (conf.yaml by default)")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(mvncopy::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(mvncopy::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(mvncopy::config::invalid))]
    ConfigInvalid { message: String },

    // Coordinate errors
    #[error("Invalid artifact coordinates: {coords}")]
    #[diagnostic(
        code(mvncopy::artifact::invalid_coordinates),
        help("Expected <groupId>:<artifactId>[:<extension>[:<classifier>]][:<version>]")
    )]
    InvalidCoordinates { coords: String },

    // Version resolution errors
    #[error("Failed to resolve versions for '{coords}' on repository '{repository}': {reason}")]
    #[diagnostic(
        code(mvncopy::repository::version_resolution_failed),
        help("Check that the coordinates are correct and the repository is reachable")
    )]
    VersionResolutionFailed {
        coords: String,
        repository: String,
        reason: String,
    },

    #[error("Failed to parse repository metadata from {path}")]
    #[diagnostic(code(mvncopy::repository::metadata_invalid))]
    MetadataInvalid { path: String, reason: String },

    // Fetch errors
    #[error("Artifact not found on repository '{repository}': {artifact}")]
    #[diagnostic(
        code(mvncopy::repository::artifact_not_found),
        help("The primary artifact must exist on the source repository; only sub-artifacts may be absent")
    )]
    ArtifactNotFound {
        artifact: String,
        repository: String,
    },

    #[error("Transfer failed for {url}: {reason}")]
    #[diagnostic(code(mvncopy::repository::transport_failed))]
    TransportFailed { url: String, reason: String },

    #[error("Authentication failed for repository '{repository}'")]
    #[diagnostic(
        code(mvncopy::repository::auth_failed),
        help("Check the username/password configured for this repository")
    )]
    AuthFailed { repository: String },

    // Deploy errors
    #[error("Failed to publish {artifact} to repository '{repository}': {reason}")]
    #[diagnostic(
        code(mvncopy::repository::publish_failed),
        help("The target may reject re-deployment of an existing version")
    )]
    PublishFailed {
        artifact: String,
        repository: String,
        reason: String,
    },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(mvncopy::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(mvncopy::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for CopyError {
    fn from(err: std::io::Error) -> Self {
        CopyError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for CopyError {
    fn from(err: serde_yaml::Error) -> Self {
        CopyError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, CopyError>;
