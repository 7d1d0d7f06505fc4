//! # Attachment
//!
//! Module dedicated to message attachments. An [`Attachment`] is a
//! lightweight descriptor: it references content owned by someone
//! else (the file system, the caller) and never copies file bytes.

#[cfg(feature = "mime")]
use std::borrow::Cow;
use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
    sync::Arc,
};

use tracing::debug;

/// The content type used when nothing better can be guessed.
pub const DEFAULT_MIME: &str = "application/octet-stream";

/// The message attachment descriptor.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Attachment {
    filename: Option<String>,
    /// The content type, `None` when it still has to be guessed.
    mime: Option<String>,
    source: AttachmentSource,
}

impl Attachment {
    /// Create an attachment referencing the file at the given path.
    ///
    /// The file is not opened: a missing or blank content type is
    /// left to be guessed once the content is read.
    pub(crate) fn from_path(path: impl Into<PathBuf>, mime: Option<&str>) -> Self {
        let path = path.into();

        Self {
            filename: file_name(&path),
            mime: non_blank(mime).map(ToOwned::to_owned),
            source: AttachmentSource::Path(path),
        }
    }

    /// Create an attachment sharing the given in-memory content.
    ///
    /// A blank content type is guessed from the content itself.
    pub(crate) fn from_stream(name: impl ToString, content: Arc<[u8]>, mime: &str) -> Self {
        let mime = match non_blank(Some(mime)) {
            Some(mime) => mime.to_owned(),
            None => {
                let mime = tree_magic_mini::from_u8(&content);
                debug!("no content type found, guessing from content: {mime}");
                mime.to_owned()
            }
        };

        Self {
            filename: Some(name.to_string()),
            mime: Some(mime),
            source: AttachmentSource::Stream(content),
        }
    }

    /// Create an attachment from a resolved file handle.
    pub(crate) fn from_file_handle(handle: FileHandle) -> Self {
        Self {
            filename: Some(handle.name.clone()),
            mime: Some(handle.mime.clone()),
            source: AttachmentSource::File(handle),
        }
    }

    /// Return the file name shown to the recipient, if any.
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// Return the attachment content type.
    ///
    /// Path attachments added without content type return
    /// [`DEFAULT_MIME`] until their content is read, see
    /// [`Self::is_mime_guessed`].
    pub fn mime(&self) -> &str {
        self.mime.as_deref().unwrap_or(DEFAULT_MIME)
    }

    /// Return `true` if the content type has to be guessed from the
    /// content.
    pub fn is_mime_guessed(&self) -> bool {
        self.mime.is_none()
    }

    /// Return the content type, guessing it from the given content
    /// when it is not known.
    #[cfg(feature = "mime")]
    pub(crate) fn mime_or_guess(&self, contents: &[u8]) -> &str {
        match &self.mime {
            Some(mime) => mime,
            None => {
                let mime = tree_magic_mini::from_u8(contents);
                debug!("no content type found, guessing from content: {mime}");
                mime
            }
        }
    }

    /// Return where the attachment content lives.
    pub fn source(&self) -> &AttachmentSource {
        &self.source
    }

    /// Read the attachment content.
    ///
    /// File-based attachments are read from the file system, streams
    /// are borrowed.
    #[cfg(feature = "mime")]
    pub fn read_contents(&self) -> crate::Result<Cow<'_, [u8]>> {
        let path = match &self.source {
            AttachmentSource::Stream(content) => return Ok(Cow::Borrowed(content)),
            AttachmentSource::Path(path) => path,
            AttachmentSource::File(handle) => &handle.path,
        };

        debug!("reading attachment contents at {path:?}");
        let contents = std::fs::read(path)
            .map_err(|err| crate::Error::ReadAttachmentError(err, path.clone()))?;

        Ok(Cow::Owned(contents))
    }
}

/// Where the content of an attachment lives.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AttachmentSource {
    /// A file owned by the host file system.
    Path(PathBuf),
    /// An in-memory content owned by the caller, shared not copied.
    Stream(Arc<[u8]>),
    /// A file resolved ahead of time.
    File(FileHandle),
}

/// A resolved file handle.
///
/// Handles can only be obtained from the
/// [`FileResolver`](crate::FileResolver), which checks the file exists
/// and can be accessed by the target platform.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FileHandle {
    path: PathBuf,
    name: String,
    mime: String,
    size: u64,
}

impl FileHandle {
    #[cfg_attr(not(feature = "tokio"), allow(dead_code))]
    pub(crate) fn new(path: PathBuf, mime: String, size: u64) -> Self {
        let name = file_name(&path).unwrap_or_else(|| String::from("noname"));
        Self {
            path,
            name,
            mime,
            size,
        }
    }

    /// Return the canonical path of the file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return the file name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return the file content type.
    pub fn mime(&self) -> &str {
        &self.mime
    }

    /// Return the file size, in bytes.
    pub fn size(&self) -> u64 {
        self.size
    }
}

/// Guess the content type of the file at the given path, falling
/// back to [`DEFAULT_MIME`].
#[cfg(feature = "tokio")]
pub(crate) fn guess_mime_from_path(path: &Path) -> String {
    match tree_magic_mini::from_filepath(path) {
        Some(mime) => {
            debug!("no content type found, guessing from file {path:?}: {mime}");
            mime.to_owned()
        }
        None => {
            debug!("cannot guess content type of file {path:?}, using {DEFAULT_MIME}");
            DEFAULT_MIME.to_owned()
        }
    }
}

pub(crate) fn non_blank(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(OsStr::to_str)
        .map(ToOwned::to_owned)
}
