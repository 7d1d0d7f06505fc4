//! # Platform
//!
//! Module dedicated to platform capabilities. Native mail composers
//! do not expose the same features everywhere: some cannot render
//! HTML bodies, some cannot receive attachments, some only accept
//! attachments from specific sources. The [`PlatformCapabilities`]
//! structure describes what a [`Platform`] supports, so callers can
//! check availability before calling gated builder operations.

use std::{fmt, str::FromStr};

use crate::{Error, Result};

/// The platform owning the native mail composer.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Platform {
    Android,
    Ios,
    /// Sandboxed Windows apps, which can only access files by path
    /// inside their application data.
    Windows,
    /// Any platform without HTML body nor attachment support.
    #[default]
    Other,
}

impl Platform {
    /// Return the platform the library is compiled for.
    pub fn current() -> Self {
        if cfg!(target_os = "android") {
            Self::Android
        } else if cfg!(target_os = "ios") {
            Self::Ios
        } else if cfg!(target_os = "windows") {
            Self::Windows
        } else {
            Self::Other
        }
    }

    /// Return `true` if the platform restricts file access by path.
    pub fn is_sandboxed(&self) -> bool {
        matches!(self, Self::Windows)
    }

    /// Describe what the platform native mail composer supports.
    pub fn capabilities(&self) -> PlatformCapabilities {
        use AttachmentInputKind::*;

        match self {
            Self::Android => PlatformCapabilities {
                supports_html_body: true,
                supports_attachments: true,
                attachment_input_kinds: vec![Path, PathWithContentType],
            },
            Self::Ios => PlatformCapabilities {
                supports_html_body: true,
                supports_attachments: true,
                attachment_input_kinds: vec![PathWithContentType, Stream],
            },
            Self::Windows => PlatformCapabilities {
                supports_html_body: false,
                supports_attachments: true,
                attachment_input_kinds: vec![PathWithContentType, FileHandle],
            },
            Self::Other => PlatformCapabilities::default(),
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Android => "android",
            Self::Ios => "ios",
            Self::Windows => "windows",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "android" => Ok(Self::Android),
            "ios" => Ok(Self::Ios),
            "windows" => Ok(Self::Windows),
            "other" => Ok(Self::Other),
            unknown => Err(Error::ParsePlatformError(unknown.to_owned())),
        }
    }
}

/// The source an attachment can be built from.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum AttachmentInputKind {
    /// A file system path, the content type being guessed.
    Path,
    /// A file system path with an explicit content type.
    PathWithContentType,
    /// An in-memory content with a file name and a content type.
    Stream,
    /// A file handle resolved ahead of time.
    FileHandle,
}

impl fmt::Display for AttachmentInputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path => write!(f, "path"),
            Self::PathWithContentType => write!(f, "path with content type"),
            Self::Stream => write!(f, "in-memory stream"),
            Self::FileHandle => write!(f, "file handle"),
        }
    }
}

/// The capabilities of a platform native mail composer.
///
/// Gated builder operations always exist, but they fail with an
/// [`Error`] whose [`Error::is_platform_not_supported`] returns
/// `true` when the matching capability is missing.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub struct PlatformCapabilities {
    pub supports_html_body: bool,
    pub supports_attachments: bool,
    pub attachment_input_kinds: Vec<AttachmentInputKind>,
}

impl PlatformCapabilities {
    /// Return `true` if attachments can be built from the given kind
    /// of input.
    pub fn supports(&self, kind: AttachmentInputKind) -> bool {
        self.supports_attachments && self.attachment_input_kinds.contains(&kind)
    }
}

#[cfg(test)]
mod tests {
    use super::{AttachmentInputKind::*, Platform};

    #[test]
    fn capabilities() {
        let android = Platform::Android.capabilities();
        assert!(android.supports_html_body);
        assert!(android.supports(Path));
        assert!(android.supports(PathWithContentType));
        assert!(!android.supports(Stream));
        assert!(!android.supports(FileHandle));

        let ios = Platform::Ios.capabilities();
        assert!(ios.supports_html_body);
        assert!(!ios.supports(Path));
        assert!(ios.supports(PathWithContentType));
        assert!(ios.supports(Stream));

        let windows = Platform::Windows.capabilities();
        assert!(!windows.supports_html_body);
        assert!(windows.supports(PathWithContentType));
        assert!(windows.supports(FileHandle));
        assert!(!windows.supports(Stream));

        let other = Platform::Other.capabilities();
        assert!(!other.supports_html_body);
        assert!(!other.supports_attachments);
        assert!(other.attachment_input_kinds.is_empty());
    }

    #[test]
    fn only_windows_is_sandboxed() {
        assert!(Platform::Windows.is_sandboxed());
        assert!(!Platform::Android.is_sandboxed());
        assert!(!Platform::Ios.is_sandboxed());
        assert!(!Platform::Other.is_sandboxed());
    }

    #[test]
    fn parse() {
        assert_eq!("android".parse::<Platform>().unwrap(), Platform::Android);
        assert_eq!(" iOS ".parse::<Platform>().unwrap(), Platform::Ios);
        assert_eq!("WINDOWS".parse::<Platform>().unwrap(), Platform::Windows);
        assert_eq!(Platform::Windows.to_string(), "windows");

        let err = "symbian".parse::<Platform>().unwrap_err();
        assert_eq!(err.to_string(), "cannot parse platform symbian");
    }

    #[cfg(feature = "derive")]
    #[test]
    fn kebab_case_serde() {
        let json = serde_json::to_value(Platform::Ios.capabilities()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "supports-html-body": true,
                "supports-attachments": true,
                "attachment-input-kinds": ["path-with-content-type", "stream"],
            })
        );

        let platform: Platform = serde_json::from_str("\"windows\"").unwrap();
        assert_eq!(platform, Platform::Windows);
    }
}
