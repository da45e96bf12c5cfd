//! HTTP(S) repository transport
//!
//! Blocking transfers via `ureq`, matching the strictly sequential execution
//! model: one GET per metadata or artifact, one PUT per published file, with
//! HTTP basic auth when the endpoint carries credentials.
//!
//! Status mapping: 404 is a definitive "does not exist" (a value, not an
//! error), 401/403 is an authentication failure, anything else is a
//! transport or publish failure.

use std::io;
use std::path::Path;

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};

use crate::artifact::ArtifactCoordinate;
use crate::error::{CopyError, Result};
use crate::repository::metadata::RepositoryMetadata;
use crate::repository::{RepositoryEndpoint, ResolvedArtifact, layout};

pub struct HttpTransport {
    agent: ureq::Agent,
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
        }
    }

    /// GET the version-list metadata; `None` when the coordinate is unknown
    pub fn fetch_metadata(
        &self,
        coordinate: &ArtifactCoordinate,
        endpoint: &RepositoryEndpoint,
    ) -> Result<Option<RepositoryMetadata>> {
        let url = resource_url(endpoint, &layout::metadata_path(coordinate));
        let Some(response) = self.get(&url, endpoint)? else {
            return Ok(None);
        };

        let xml = response
            .into_string()
            .map_err(|e| CopyError::TransportFailed {
                url: url.clone(),
                reason: e.to_string(),
            })?;
        RepositoryMetadata::from_xml(&xml, &url).map(Some)
    }

    /// GET one artifact file into `dest`; `false` when it does not exist
    ///
    /// The body is streamed to a temporary file next to `dest` and persisted
    /// only after the transfer completes, so an interrupted download never
    /// leaves a partial file in the staging repository.
    pub fn fetch_artifact(
        &self,
        coordinate: &ArtifactCoordinate,
        endpoint: &RepositoryEndpoint,
        dest: &Path,
    ) -> Result<bool> {
        let url = resource_url(endpoint, &layout::artifact_path(coordinate)?);
        let Some(response) = self.get(&url, endpoint)? else {
            return Ok(false);
        };

        let parent = dest.parent().ok_or_else(|| CopyError::FileWriteFailed {
            path: dest.display().to_string(),
            reason: "no parent directory".to_string(),
        })?;
        std::fs::create_dir_all(parent)?;

        let mut staged = tempfile::NamedTempFile::new_in(parent)?;
        io::copy(&mut response.into_reader(), &mut staged).map_err(|e| {
            CopyError::TransportFailed {
                url: url.clone(),
                reason: e.to_string(),
            }
        })?;
        staged
            .persist(dest)
            .map_err(|e| CopyError::FileWriteFailed {
                path: dest.display().to_string(),
                reason: e.to_string(),
            })?;
        Ok(true)
    }

    /// PUT every artifact of the batch, then the merged metadata
    pub fn publish(
        &self,
        artifacts: &[ResolvedArtifact],
        endpoint: &RepositoryEndpoint,
    ) -> Result<()> {
        for artifact in artifacts {
            let url = resource_url(endpoint, &layout::artifact_path(&artifact.coordinate)?);
            let file = std::fs::File::open(&artifact.file)?;
            self.put(&url, endpoint, file)
                .map_err(|e| publish_error(&artifact.coordinate.to_string(), endpoint, e))?;
        }
        self.publish_metadata(artifacts, endpoint)
    }

    /// Merge the batch's versions into the target's metadata and upload it
    fn publish_metadata(
        &self,
        artifacts: &[ResolvedArtifact],
        endpoint: &RepositoryEndpoint,
    ) -> Result<()> {
        for (coordinate, versions) in super::batch_versions(artifacts) {
            let mut metadata = self
                .fetch_metadata(&coordinate, endpoint)?
                .unwrap_or_else(|| {
                    RepositoryMetadata::new(coordinate.group_id(), coordinate.artifact_id())
                });
            for version in &versions {
                metadata.add_version(version);
            }

            let path = layout::metadata_path(&coordinate);
            let url = resource_url(endpoint, &path);
            self.put_string(&url, endpoint, &metadata.to_xml()?)
                .map_err(|e| publish_error(&path, endpoint, e))?;
        }
        Ok(())
    }

    fn get(&self, url: &str, endpoint: &RepositoryEndpoint) -> Result<Option<ureq::Response>> {
        let mut request = self.agent.get(url);
        if let Some(auth) = basic_auth(endpoint) {
            request = request.set("Authorization", &auth);
        }
        match request.call() {
            Ok(response) => Ok(Some(response)),
            Err(ureq::Error::Status(404, _)) => Ok(None),
            Err(ureq::Error::Status(401 | 403, _)) => Err(CopyError::AuthFailed {
                repository: endpoint.id().to_string(),
            }),
            Err(e) => Err(CopyError::TransportFailed {
                url: url.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    fn put(
        &self,
        url: &str,
        endpoint: &RepositoryEndpoint,
        body: impl io::Read,
    ) -> std::result::Result<ureq::Response, ureq::Error> {
        let mut request = self.agent.put(url);
        if let Some(auth) = basic_auth(endpoint) {
            request = request.set("Authorization", &auth);
        }
        request.send(body)
    }

    fn put_string(
        &self,
        url: &str,
        endpoint: &RepositoryEndpoint,
        body: &str,
    ) -> std::result::Result<ureq::Response, ureq::Error> {
        let mut request = self.agent.put(url);
        if let Some(auth) = basic_auth(endpoint) {
            request = request.set("Authorization", &auth);
        }
        request.send_string(body)
    }
}

fn resource_url(endpoint: &RepositoryEndpoint, relative: &str) -> String {
    format!("{}/{}", endpoint.url().trim_end_matches('/'), relative)
}

fn basic_auth(endpoint: &RepositoryEndpoint) -> Option<String> {
    endpoint.credentials().map(|c| {
        format!(
            "Basic {}",
            BASE64.encode(format!("{}:{}", c.username, c.password))
        )
    })
}

fn publish_error(artifact: &str, endpoint: &RepositoryEndpoint, err: ureq::Error) -> CopyError {
    match err {
        ureq::Error::Status(401 | 403, _) => CopyError::AuthFailed {
            repository: endpoint.id().to_string(),
        },
        ureq::Error::Status(status, _) => CopyError::PublishFailed {
            artifact: artifact.to_string(),
            repository: endpoint.id().to_string(),
            reason: format!("server responded with status {status}"),
        },
        e => CopyError::PublishFailed {
            artifact: artifact.to_string(),
            repository: endpoint.id().to_string(),
            reason: e.to_string(),
        },
    }
}
