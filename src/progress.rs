//! Progress bar display for copy operations

use indicatif::{ProgressBar, ProgressStyle};

/// Progress over the missing-version set of one coordinate
pub struct CopyProgress {
    version_pb: ProgressBar,
}

impl CopyProgress {
    /// Create a new progress display with the missing version count
    pub fn new(total_versions: u64) -> Self {
        let version_style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-");

        let version_pb = ProgressBar::new(total_versions);
        version_pb.set_style(version_style);

        Self { version_pb }
    }

    /// Show the version currently being transferred
    pub fn start_version(&self, artifact: &str) {
        self.version_pb.set_message(artifact.to_string());
    }

    /// Mark one version as copied
    pub fn inc(&self) {
        self.version_pb.inc(1);
    }

    /// Remove the bar once the coordinate is done
    pub fn finish(&self) {
        self.version_pb.finish_and_clear();
    }
}
