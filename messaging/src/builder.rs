//! # Builder
//!
//! Module dedicated to the [`MessageBuilder`], which accumulates
//! message fields into a draft then builds the final read-only
//! [`Message`].
//!
//! Every builder operation comes in two forms: a mutable one
//! (`add_*`, `set_*`) for callers keeping the builder in place, and a
//! chained one taking and returning the builder.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use shellexpand_utils::shellexpand_path;
use tracing::{debug, trace};

use crate::{
    attachment::{Attachment, FileHandle},
    config::MessagingConfig,
    message::Message,
    platform::{AttachmentInputKind, Platform, PlatformCapabilities},
    Error, Result,
};

/// The message builder.
///
/// Blank inputs are not errors: blank single addresses, empty
/// subjects and empty bodies are silently ignored. Operations the
/// target platform does not support fail with an [`Error`] whose
/// [`Error::is_platform_not_supported`] returns `true`, leaving the
/// draft untouched.
#[derive(Clone, Debug)]
pub struct MessageBuilder {
    config: MessagingConfig,
    draft: Message,
}

impl Default for MessageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageBuilder {
    /// Create a new builder targeting the current platform.
    pub fn new() -> Self {
        Self::for_platform(Platform::current())
    }

    /// Create a new builder targeting the given platform.
    pub fn for_platform(platform: Platform) -> Self {
        Self::from_config(&MessagingConfig {
            platform: Some(platform),
            ..Default::default()
        })
    }

    /// Create a new builder from the given configuration.
    pub fn from_config(config: &MessagingConfig) -> Self {
        let mut config = config.clone();
        config.platform = Some(config.platform());
        debug!("creating message builder for platform {}", config.platform());

        Self {
            config,
            draft: Message::default(),
        }
    }

    /// Return the target platform.
    pub fn platform(&self) -> Platform {
        self.config.platform()
    }

    /// Return the capabilities of the target platform.
    pub fn capabilities(&self) -> PlatformCapabilities {
        self.platform().capabilities()
    }

    /// Append the given address to the To addresses, unless it is
    /// blank.
    pub fn add_to(&mut self, address: impl AsRef<str>) {
        push_address(&mut self.draft.recipients, "to", address.as_ref());
    }

    /// Append all the given addresses to the To addresses.
    ///
    /// Unlike [`Self::add_to`], addresses are not filtered.
    pub fn add_to_all(&mut self, addresses: impl IntoIterator<Item = impl ToString>) {
        extend_addresses(&mut self.draft.recipients, "to", addresses);
    }

    pub fn to(mut self, address: impl AsRef<str>) -> Self {
        self.add_to(address);
        self
    }

    pub fn to_all(mut self, addresses: impl IntoIterator<Item = impl ToString>) -> Self {
        self.add_to_all(addresses);
        self
    }

    /// Append the given address to the Cc addresses, unless it is
    /// blank.
    pub fn add_cc(&mut self, address: impl AsRef<str>) {
        push_address(&mut self.draft.recipients_cc, "cc", address.as_ref());
    }

    /// Append all the given addresses to the Cc addresses, without
    /// filtering.
    pub fn add_cc_all(&mut self, addresses: impl IntoIterator<Item = impl ToString>) {
        extend_addresses(&mut self.draft.recipients_cc, "cc", addresses);
    }

    pub fn cc(mut self, address: impl AsRef<str>) -> Self {
        self.add_cc(address);
        self
    }

    pub fn cc_all(mut self, addresses: impl IntoIterator<Item = impl ToString>) -> Self {
        self.add_cc_all(addresses);
        self
    }

    /// Append the given address to the Bcc addresses, unless it is
    /// blank.
    pub fn add_bcc(&mut self, address: impl AsRef<str>) {
        push_address(&mut self.draft.recipients_bcc, "bcc", address.as_ref());
    }

    /// Append all the given addresses to the Bcc addresses, without
    /// filtering.
    pub fn add_bcc_all(&mut self, addresses: impl IntoIterator<Item = impl ToString>) {
        extend_addresses(&mut self.draft.recipients_bcc, "bcc", addresses);
    }

    pub fn bcc(mut self, address: impl AsRef<str>) -> Self {
        self.add_bcc(address);
        self
    }

    pub fn bcc_all(mut self, addresses: impl IntoIterator<Item = impl ToString>) -> Self {
        self.add_bcc_all(addresses);
        self
    }

    /// Set the subject, unless the given one is empty.
    pub fn set_subject(&mut self, subject: impl AsRef<str>) {
        let subject = subject.as_ref();

        if subject.is_empty() {
            trace!("ignoring empty subject");
            return;
        }

        self.draft.subject = subject.to_owned();
    }

    pub fn subject(mut self, subject: impl AsRef<str>) -> Self {
        self.set_subject(subject);
        self
    }

    /// Set the plain text body, unless the given one is empty.
    pub fn set_body(&mut self, body: impl AsRef<str>) {
        let body = body.as_ref();

        if body.is_empty() {
            trace!("ignoring empty body");
            return;
        }

        self.draft.body = body.to_owned();
        self.draft.is_html = false;
    }

    pub fn body(mut self, body: impl AsRef<str>) -> Self {
        self.set_body(body);
        self
    }

    /// Set the HTML body, unless the given one is empty.
    ///
    /// Fails if the target platform cannot render HTML bodies, see
    /// [`PlatformCapabilities::supports_html_body`].
    pub fn set_body_as_html(&mut self, html: impl AsRef<str>) -> Result<()> {
        let platform = self.platform();

        if !platform.capabilities().supports_html_body {
            debug!("cannot set html body: not supported on platform {platform}");
            return Err(Error::HtmlBodyNotSupportedError(platform));
        }

        let html = html.as_ref();

        if html.is_empty() {
            trace!("ignoring empty html body");
            return Ok(());
        }

        self.draft.body = html.to_owned();
        self.draft.is_html = true;
        Ok(())
    }

    /// Chained form of [`Self::set_body_as_html`].
    ///
    /// # Errors
    ///
    /// On error the builder is consumed together with its draft. Use
    /// [`Self::set_body_as_html`] to keep the draft when the platform capability
    /// has not been checked beforehand.
    pub fn body_as_html(mut self, html: impl AsRef<str>) -> Result<Self> {
        self.set_body_as_html(html)?;
        Ok(self)
    }

    /// Attach the file at the given path using the given content
    /// type. The file is not opened: a blank content type is guessed
    /// from the file contents when the message is exported.
    ///
    /// On sandboxed platforms, the path must live inside one of the
    /// configured sandbox directories. Otherwise prefer
    /// [`Self::add_file_handle`].
    pub fn add_attachment(
        &mut self,
        path: impl AsRef<Path>,
        mime: impl AsRef<str>,
    ) -> Result<()> {
        self.check_attachment_input(AttachmentInputKind::PathWithContentType)?;
        let path = self.check_attachment_path(path)?;
        let attachment = Attachment::from_path(path, Some(mime.as_ref()));
        self.push_attachment(attachment);
        Ok(())
    }

    /// Chained form of [`Self::add_attachment`].
    ///
    /// # Errors
    ///
    /// On error the builder is consumed together with its draft. Use
    /// [`Self::add_attachment`] to keep the draft when the platform capability
    /// has not been checked beforehand.
    pub fn with_attachment(
        mut self,
        path: impl AsRef<Path>,
        mime: impl AsRef<str>,
    ) -> Result<Self> {
        self.add_attachment(path, mime)?;
        Ok(self)
    }

    /// Attach the file at the given path. The file is not opened: its
    /// content type is guessed when the message is exported.
    pub fn add_attachment_path(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.check_attachment_input(AttachmentInputKind::Path)?;
        let path = self.check_attachment_path(path)?;
        let attachment = Attachment::from_path(path, None);
        self.push_attachment(attachment);
        Ok(())
    }

    /// Chained form of [`Self::add_attachment_path`].
    ///
    /// # Errors
    ///
    /// On error the builder is consumed together with its draft. Use
    /// [`Self::add_attachment_path`] to keep the draft when the platform capability
    /// has not been checked beforehand.
    pub fn with_attachment_path(mut self, path: impl AsRef<Path>) -> Result<Self> {
        self.add_attachment_path(path)?;
        Ok(self)
    }

    /// Attach the given in-memory content.
    ///
    /// The content is shared with the caller, not copied. A blank
    /// content type is guessed from the content.
    pub fn add_attachment_stream(
        &mut self,
        name: impl ToString,
        content: impl Into<Arc<[u8]>>,
        mime: impl AsRef<str>,
    ) -> Result<()> {
        self.check_attachment_input(AttachmentInputKind::Stream)?;
        let attachment = Attachment::from_stream(name, content.into(), mime.as_ref());
        self.push_attachment(attachment);
        Ok(())
    }

    /// Chained form of [`Self::add_attachment_stream`].
    ///
    /// # Errors
    ///
    /// On error the builder is consumed together with its draft. Use
    /// [`Self::add_attachment_stream`] to keep the draft when the platform capability
    /// has not been checked beforehand.
    pub fn with_attachment_stream(
        mut self,
        name: impl ToString,
        content: impl Into<Arc<[u8]>>,
        mime: impl AsRef<str>,
    ) -> Result<Self> {
        self.add_attachment_stream(name, content, mime)?;
        Ok(self)
    }

    /// Attach the file behind the given handle, obtained from the
    /// [`FileResolver`](crate::FileResolver).
    pub fn add_file_handle(&mut self, handle: FileHandle) -> Result<()> {
        self.check_attachment_input(AttachmentInputKind::FileHandle)?;
        let attachment = Attachment::from_file_handle(handle);
        self.push_attachment(attachment);
        Ok(())
    }

    /// Chained form of [`Self::add_file_handle`].
    ///
    /// # Errors
    ///
    /// On error the builder is consumed together with its draft. Use
    /// [`Self::add_file_handle`] to keep the draft when the platform capability
    /// has not been checked beforehand.
    pub fn with_file_handle(mut self, handle: FileHandle) -> Result<Self> {
        self.add_file_handle(handle)?;
        Ok(self)
    }

    /// Build the final message.
    ///
    /// No validation is performed: checking whether the message can
    /// actually be sent is the job of the native mail composer. The
    /// builder can be reused afterwards; the returned message is a
    /// snapshot not affected by further changes.
    pub fn build(&self) -> Message {
        debug!(
            to = self.draft.recipients.len(),
            cc = self.draft.recipients_cc.len(),
            bcc = self.draft.recipients_bcc.len(),
            attachments = self.draft.attachments.len(),
            html = self.draft.is_html,
            "building message"
        );

        self.draft.clone()
    }

    fn check_attachment_input(&self, kind: AttachmentInputKind) -> Result<()> {
        let platform = self.platform();
        let capabilities = platform.capabilities();

        if !capabilities.supports_attachments {
            debug!("cannot add attachment: not supported on platform {platform}");
            return Err(Error::AttachmentsNotSupportedError(platform));
        }

        if !capabilities.supports(kind) {
            debug!("cannot add attachment from {kind}: not supported on platform {platform}");
            return Err(Error::AttachmentInputNotSupportedError(kind, platform));
        }

        Ok(())
    }

    fn check_attachment_path(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = shellexpand_path(path);

        if !self.config.allows_path(&path) {
            debug!("cannot access attachment at {path:?} from sandbox");
            return Err(Error::SandboxedAttachmentPathError(path));
        }

        Ok(path)
    }

    fn push_attachment(&mut self, attachment: Attachment) {
        trace!("adding attachment: {attachment:?}");
        self.draft.attachments.push(attachment);
    }
}

fn push_address(addresses: &mut Vec<String>, kind: &str, address: &str) {
    if address.trim().is_empty() {
        trace!("ignoring blank {kind} address");
        return;
    }

    trace!("adding {kind} address {address}");
    addresses.push(address.to_owned());
}

fn extend_addresses(
    addresses: &mut Vec<String>,
    kind: &str,
    others: impl IntoIterator<Item = impl ToString>,
) {
    let len = addresses.len();
    addresses.extend(others.into_iter().map(|address| address.to_string()));
    trace!("added {} {kind} address(es)", addresses.len() - len);
}
