//! Local storage for uploaded gallery images.

use std::path::{Path, PathBuf};

use chrono::Utc;
use rand::Rng;

/// Path prefix under which uploaded files are served.
pub const UPLOADS_ROUTE: &str = "/uploads";

/// Upper bound (exclusive) of the random suffix in generated file names.
const RANDOM_SUFFIX_BOUND: u32 = 1_000_000_000;

/// Upload directory together with the public base URL files are served from.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
    public_url: String,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>, public_url: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            public_url: public_url.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes an uploaded file under a freshly generated name.
    ///
    /// # Arguments
    /// - `original_name` - Client-side filename, only its extension is kept
    /// - `bytes` - File contents
    ///
    /// # Returns
    /// - `Ok(String)` - Public URL of the stored file
    /// - `Err(io::Error)` - Failed to write the file
    pub async fn save(&self, original_name: &str, bytes: &[u8]) -> Result<String, std::io::Error> {
        let file_name = generate_file_name(original_name);

        tokio::fs::write(self.dir.join(&file_name), bytes).await?;

        Ok(self.public_url_for(&file_name))
    }

    /// Removes a file written by `save`, given the public URL it returned.
    ///
    /// URLs that do not point into this store are ignored. A failed removal is logged.
    pub async fn discard(&self, url: &str) {
        let prefix = self.public_url_for("");
        let Some(file_name) = url.strip_prefix(&prefix) else {
            return;
        };
        if file_name.is_empty() || file_name.contains('/') {
            return;
        }

        if let Err(err) = tokio::fs::remove_file(self.dir.join(file_name)).await {
            tracing::warn!("Failed to remove unreferenced upload {}: {}", file_name, err);
        }
    }

    /// Public URL of a file stored in the upload directory.
    pub fn public_url_for(&self, file_name: &str) -> String {
        format!("{}{}/{}", self.public_url, UPLOADS_ROUTE, file_name)
    }
}

/// Builds `image-<unix millis>-<random><ext>`, where `<ext>` is the original file's
/// extension including the dot, or empty when it has none.
pub fn generate_file_name(original_name: &str) -> String {
    let extension = Path::new(original_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext))
        .unwrap_or_default();
    let suffix = rand::rng().random_range(0..RANDOM_SUFFIX_BOUND);

    format!(
        "image-{}-{}{}",
        Utc::now().timestamp_millis(),
        suffix,
        extension
    )
}
