//! Image lookup from a local directory.

use async_trait::async_trait;
use crier_core::{MediaRef, Topic};
use crier_error::CrierResult;
use crier_interface::ImageProvider;
use std::path::PathBuf;
use tracing::{debug, instrument, warn};

/// Finds an image whose file name contains the topic (case-insensitive).
///
/// A missing directory or no matching file is a normal `None` outcome; the
/// post goes out without media.
pub struct DirectoryImageProvider {
    dir: PathBuf,
}

impl DirectoryImageProvider {
    /// Create a provider scanning the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl ImageProvider for DirectoryImageProvider {
    #[instrument(skip(self), fields(dir = %self.dir.display(), topic = %topic))]
    async fn find(&self, topic: &Topic) -> CrierResult<Option<MediaRef>> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(error = %e, "images directory not readable");
                return Ok(None);
            }
        };

        let needle = topic.as_str().to_lowercase();
        for entry in entries.flatten() {
            let name = entry.file_name().to_string_lossy().to_lowercase();
            if name.contains(&needle) && entry.path().is_file() {
                debug!(path = %entry.path().display(), "found image for topic");
                return Ok(Some(MediaRef::Path(entry.path())));
            }
        }

        debug!("no image found for topic");
        Ok(None)
    }
}
