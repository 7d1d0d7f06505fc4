//! # Resolver
//!
//! Module dedicated to file attachments resolution. Looking up a file
//! can be slow, and on sandboxed platforms it can be denied. Instead
//! of blocking inside the builder, callers resolve files ahead of
//! time with the [`FileResolver`], then give the resulting
//! [`FileHandle`] to the
//! [`MessageBuilder`](crate::MessageBuilder).
//!
//! Resolution is a plain future: dropping it cancels it, and callers
//! can bound it with their own timeout.

use std::{
    io,
    path::{Path, PathBuf},
};

use shellexpand_utils::shellexpand_path;
use tokio::fs;
use tracing::debug;

use crate::{
    attachment::{guess_mime_from_path, non_blank, FileHandle},
    config::MessagingConfig,
    Error, Result,
};

/// The file attachment resolver.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FileResolver {
    sandbox_dirs: Option<Vec<PathBuf>>,
}

impl FileResolver {
    /// Create a resolver accepting any readable file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver only accepting files living inside the given
    /// directories.
    pub fn sandboxed(dirs: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            sandbox_dirs: Some(dirs.into_iter().map(Into::into).collect()),
        }
    }

    /// Create a resolver matching the configured platform: sandboxed
    /// platforms get a sandboxed resolver.
    pub fn from_config(config: &MessagingConfig) -> Self {
        if config.platform().is_sandboxed() {
            Self::sandboxed(config.sandbox_dirs.clone())
        } else {
            Self::new()
        }
    }

    /// Resolve the file at the given path into a [`FileHandle`].
    ///
    /// A missing or blank content type is guessed from the file.
    pub async fn resolve(&self, path: impl AsRef<Path>, mime: Option<&str>) -> Result<FileHandle> {
        let path = shellexpand_path(path);
        debug!("resolving attachment at {path:?}");

        let path = match fs::canonicalize(&path).await {
            Ok(path) => path,
            Err(err) => return Err(map_io_error(err, path)),
        };

        if !self.is_in_sandbox(&path).await {
            debug!("attachment at {path:?} is outside of the sandbox");
            return Err(Error::SandboxedAttachmentPathError(path));
        }

        let metadata = match fs::metadata(&path).await {
            Ok(metadata) => metadata,
            Err(err) => return Err(map_io_error(err, path)),
        };

        if !metadata.is_file() {
            return Err(Error::ResolveAttachmentNotAFileError(path));
        }

        let mime = match non_blank(mime) {
            Some(mime) => mime.to_owned(),
            None => guess_mime_from_path(&path),
        };

        Ok(FileHandle::new(path, mime, metadata.len()))
    }

    async fn is_in_sandbox(&self, path: &Path) -> bool {
        let Some(dirs) = &self.sandbox_dirs else {
            return true;
        };

        for dir in dirs {
            let dir = shellexpand_path(dir);
            let dir = fs::canonicalize(&dir).await.unwrap_or(dir);

            if path.starts_with(&dir) {
                return true;
            }
        }

        false
    }
}

fn map_io_error(err: io::Error, path: PathBuf) -> Error {
    if err.kind() == io::ErrorKind::PermissionDenied {
        debug!("cannot access attachment at {path:?}: {err}");
        Error::SandboxedAttachmentPathError(path)
    } else {
        Error::ResolveAttachmentError(err, path)
    }
}
