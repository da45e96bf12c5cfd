//! Common test utilities for mvncopy integration tests
//!
//! Builds Maven-layout repositories on the local filesystem and drives the
//! real binary against them through `file://` endpoints, so every scenario
//! runs without network access.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A pair of on-disk repositories plus a working directory for conf.yaml
pub struct TestRepos {
    #[allow(dead_code)]
    pub temp: TempDir,
    pub source: PathBuf,
    pub target: PathBuf,
    pub workdir: PathBuf,
}

impl TestRepos {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let source = temp.path().join("source");
        let target = temp.path().join("target");
        let workdir = temp.path().join("work");
        for dir in [&source, &target, &workdir] {
            std::fs::create_dir_all(dir).expect("Failed to create directory");
        }
        Self {
            temp,
            source,
            target,
            workdir,
        }
    }

    /// Write maven-metadata.xml listing `versions` for one artifact
    #[allow(dead_code)]
    pub fn write_metadata(repo: &Path, group: &str, artifact: &str, versions: &[&str]) {
        let dir = repo.join(group.replace('.', "/")).join(artifact);
        std::fs::create_dir_all(&dir).expect("Failed to create metadata directory");

        let list: String = versions
            .iter()
            .map(|v| format!("      <version>{v}</version>\n"))
            .collect();
        let latest = versions.last().unwrap_or(&"");
        let xml = format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <metadata>\n\
             \x20\x20<groupId>{group}</groupId>\n\
             \x20\x20<artifactId>{artifact}</artifactId>\n\
             \x20\x20<versioning>\n\
             \x20\x20\x20\x20<latest>{latest}</latest>\n\
             \x20\x20\x20\x20<release>{latest}</release>\n\
             \x20\x20\x20\x20<versions>\n{list}\
             \x20\x20\x20\x20</versions>\n\
             \x20\x20</versioning>\n\
             </metadata>\n"
        );
        std::fs::write(dir.join("maven-metadata.xml"), xml).expect("Failed to write metadata");
    }

    /// Place one artifact file into a repository's layout
    #[allow(dead_code)]
    pub fn write_artifact(
        repo: &Path,
        group: &str,
        artifact: &str,
        version: &str,
        file_name: &str,
        content: &str,
    ) {
        let dir = repo
            .join(group.replace('.', "/"))
            .join(artifact)
            .join(version);
        std::fs::create_dir_all(&dir).expect("Failed to create artifact directory");
        std::fs::write(dir.join(file_name), content).expect("Failed to write artifact");
    }

    /// Write conf.yaml in the working directory
    pub fn write_conf(&self, artifacts: &[&str], verbose: bool) {
        let list: String = if artifacts.is_empty() {
            String::new()
        } else {
            let entries: String = artifacts.iter().map(|a| format!("  - {a}\n")).collect();
            format!("artifact:\n{entries}")
        };
        let conf = format!(
            "source:\n  url: file://{}\ntarget:\n  url: file://{}\n{list}\
             local_repository: {}\nverbose: {verbose}\n",
            self.source.display(),
            self.target.display(),
            self.workdir.join("staging").display(),
        );
        std::fs::write(self.workdir.join("conf.yaml"), conf).expect("Failed to write conf.yaml");
    }

    /// The mvncopy binary, running in the working directory
    // Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
    #[allow(deprecated)]
    pub fn cmd(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::cargo_bin("mvncopy").unwrap();
        cmd.current_dir(&self.workdir);
        cmd
    }

    /// Path of a file inside the target repository
    #[allow(dead_code)]
    pub fn target_file(&self, relative: &str) -> PathBuf {
        self.target.join(relative)
    }

    /// Read the target's metadata for one artifact
    #[allow(dead_code)]
    pub fn target_metadata(&self, group: &str, artifact: &str) -> String {
        let path = self
            .target
            .join(group.replace('.', "/"))
            .join(artifact)
            .join("maven-metadata.xml");
        std::fs::read_to_string(path).expect("Failed to read target metadata")
    }
}
