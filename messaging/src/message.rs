//! # Message
//!
//! Module dedicated to the message built by the
//! [`MessageBuilder`](crate::MessageBuilder). The [`Message`] is a
//! read-only value describing an email for a native mail composer to
//! render: it is never sent by this library.

use crate::attachment::Attachment;

/// The email message.
///
/// Fields can only be set through the
/// [`MessageBuilder`](crate::MessageBuilder) and read through the
/// getters below.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Message {
    pub(crate) recipients: Vec<String>,
    pub(crate) recipients_cc: Vec<String>,
    pub(crate) recipients_bcc: Vec<String>,
    pub(crate) subject: String,
    pub(crate) body: String,
    pub(crate) is_html: bool,
    pub(crate) attachments: Vec<Attachment>,
}

impl Message {
    /// Return the To addresses.
    pub fn recipients(&self) -> &[String] {
        &self.recipients
    }

    /// Return the Cc addresses.
    pub fn recipients_cc(&self) -> &[String] {
        &self.recipients_cc
    }

    /// Return the Bcc addresses.
    pub fn recipients_bcc(&self) -> &[String] {
        &self.recipients_bcc
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Return `true` if the body should be rendered as HTML.
    pub fn is_html(&self) -> bool {
        self.is_html
    }

    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }
}
