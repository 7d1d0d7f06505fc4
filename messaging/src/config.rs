//! # Config
//!
//! Module dedicated to messaging configuration.

use std::path::{Component, Path, PathBuf};

use shellexpand_utils::shellexpand_path;
use tracing::debug;

use crate::platform::Platform;

/// The messaging configuration.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub struct MessagingConfig {
    /// The target platform. Defaults to the platform the library is
    /// compiled for.
    #[cfg_attr(feature = "derive", serde(default))]
    pub platform: Option<Platform>,

    /// The directories a sandboxed platform can read files from by
    /// path, usually the application data directories.
    #[cfg_attr(feature = "derive", serde(default))]
    pub sandbox_dirs: Vec<PathBuf>,
}

impl MessagingConfig {
    /// Return the configured platform, or the current one.
    pub fn platform(&self) -> Platform {
        self.platform.unwrap_or_else(Platform::current)
    }

    /// Return `true` if the given path can be accessed by path on the
    /// configured platform.
    ///
    /// Non-sandboxed platforms accept any path. Sandboxed ones only
    /// accept paths living inside one of the sandbox directories.
    /// Paths that cannot be canonicalized must not contain parent
    /// directory components.
    pub fn allows_path(&self, path: impl AsRef<Path>) -> bool {
        if !self.platform().is_sandboxed() {
            return true;
        }

        let path = shellexpand_path(path);

        if path.components().any(|c| c == Component::ParentDir) {
            debug!("cannot check sandbox of non-canonical path {path:?}");
            return false;
        }

        self.sandbox_dirs
            .iter()
            .map(shellexpand_path)
            .any(|dir| path.starts_with(dir))
    }
}
