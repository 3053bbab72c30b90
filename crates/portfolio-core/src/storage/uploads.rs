//! Image upload storage
//!
//! Uploaded images are written to `<upload_dir>/<slug><ext>`, where the slug
//! comes from the project name and the extension from the client's file
//! name. Two projects with the same slug and extension share one file, so
//! the later upload replaces the earlier image.
//!
//! The upload directory lives inside the public directory, and a project
//! records its image as `public/<path below public_dir>`, which is also the
//! URL the static file route serves it from.

use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use crate::error::UploadStage;
use crate::{Error, Result};

/// URL prefix the public directory is served under
pub const PUBLIC_MOUNT: &str = "public";

/// Slug used when a project name has no letters or digits
const FALLBACK_SLUG: &str = "untitled";

/// Lowercase ASCII slug with single hyphens between words
///
/// Non-ASCII letters are transliterated (`Café` becomes `cafe`).
pub fn slugify(name: &str) -> String {
    let slug = slug::slugify(name);
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// Extension of the last path element, dot included (`""` when there is none)
pub fn file_extension(file_name: &str) -> &str {
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(file_name);
    match base.rfind('.') {
        Some(dot) => &base[dot..],
        None => "",
    }
}

/// Writes uploaded project images under one directory
#[derive(Debug, Clone)]
pub struct ImageStore {
    upload_dir: PathBuf,
    /// `upload_dir` below the public directory, as URL segments
    public_segments: Vec<String>,
}

impl ImageStore {
    /// Fails when `upload_dir` is not inside `public_dir`
    pub fn new(public_dir: impl AsRef<Path>, upload_dir: impl Into<PathBuf>) -> Result<Self> {
        let public_dir = public_dir.as_ref();
        let upload_dir = upload_dir.into();
        let relative = upload_dir.strip_prefix(public_dir).map_err(|_| {
            Error::ConfigError(format!(
                "upload directory {} is not inside public directory {}",
                upload_dir.display(),
                public_dir.display()
            ))
        })?;
        let public_segments = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();

        Ok(Self {
            upload_dir,
            public_segments,
        })
    }

    fn file_name(project_name: &str, original_name: &str) -> String {
        format!("{}{}", slugify(project_name), file_extension(original_name))
    }

    /// Path an image for `project_name` uploaded as `original_name` is stored at
    pub fn stored_path(&self, project_name: &str, original_name: &str) -> PathBuf {
        self.upload_dir.join(Self::file_name(project_name, original_name))
    }

    /// Image path recorded on the project, relative to the site root
    pub fn public_path(&self, project_name: &str, original_name: &str) -> String {
        let mut segments = Vec::with_capacity(self.public_segments.len() + 2);
        segments.push(PUBLIC_MOUNT.to_string());
        segments.extend(self.public_segments.iter().cloned());
        segments.push(Self::file_name(project_name, original_name));
        segments.join("/")
    }

    /// Write the image and return its public path
    ///
    /// An existing file at the same path is truncated first.
    pub async fn save(&self, project_name: &str, original_name: &str, bytes: &[u8]) -> Result<String> {
        if let Err(e) = fs::create_dir_all(&self.upload_dir).await {
            warn!(
                dir = %self.upload_dir.display(),
                error = %e,
                "Failed to create upload directory"
            );
        }

        let path = self.stored_path(project_name, original_name);
        let mut file = fs::File::create(&path)
            .await
            .map_err(|e| Error::upload(UploadStage::TargetFile, e.to_string()))?;

        file.write_all(bytes)
            .await
            .map_err(|e| Error::upload(UploadStage::CopyFile, e.to_string()))?;
        file.flush()
            .await
            .map_err(|e| Error::upload(UploadStage::CopyFile, e.to_string()))?;

        debug!(path = %path.display(), size_bytes = bytes.len(), "Image stored");
        Ok(self.public_path(project_name, original_name))
    }
}
