//! # Error
//!
//! Module dedicated to messaging errors. It contains an [`Error`]
//! enum based on [`thiserror::Error`] and a type alias [`Result`].

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::platform::{AttachmentInputKind, Platform};

/// The global `Result` alias of the library.
pub type Result<T> = std::result::Result<T, Error>;

/// The global `Error` enum of the library.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot set HTML body: API not supported on platform {0}, use PlatformCapabilities::supports_html_body to check availability")]
    HtmlBodyNotSupportedError(Platform),
    #[error("cannot add attachment: API not supported on platform {0}, use PlatformCapabilities::supports_attachments to check availability")]
    AttachmentsNotSupportedError(Platform),
    #[error("cannot add attachment from {0}: API not supported on platform {1}, use PlatformCapabilities::supports to check availability")]
    AttachmentInputNotSupportedError(AttachmentInputKind, Platform),
    #[error("cannot add attachment at {0:?}: sandboxed apps cannot access files by path unless they reside in their application data, resolve it with FileResolver and attach the file handle instead")]
    SandboxedAttachmentPathError(PathBuf),

    #[error("cannot resolve attachment at {1:?}")]
    ResolveAttachmentError(#[source] io::Error, PathBuf),
    #[error("cannot resolve attachment at {0:?}: not a regular file")]
    ResolveAttachmentNotAFileError(PathBuf),

    #[cfg(feature = "mime")]
    #[error("cannot read attachment at {1:?}")]
    ReadAttachmentError(#[source] io::Error, PathBuf),
    #[cfg(feature = "mime")]
    #[error("cannot write MIME message")]
    WriteMimeMessageError(#[source] io::Error),

    #[error("cannot parse platform {0}")]
    ParsePlatformError(String),
}

impl Error {
    /// Return `true` if the error comes from an operation the target
    /// platform does not support.
    ///
    /// A sandboxed attachment path is part of this family: the
    /// operation exists, but the platform requires another input
    /// kind to perform it.
    pub fn is_platform_not_supported(&self) -> bool {
        matches!(
            self,
            Self::HtmlBodyNotSupportedError(_)
                | Self::AttachmentsNotSupportedError(_)
                | Self::AttachmentInputNotSupportedError(_, _)
                | Self::SandboxedAttachmentPathError(_)
        )
    }
}
