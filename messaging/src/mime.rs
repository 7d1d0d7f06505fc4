//! # MIME
//!
//! Module dedicated to MIME message export. Some native mail
//! composers only accept a raw MIME message (for example a `.eml`
//! file opened by the default mail client). This module converts a
//! [`Message`] into a [`mail_builder::MessageBuilder`].

use std::borrow::Cow;

use mail_builder::{headers::address::Address, mime::BodyPart, MessageBuilder};
use tracing::debug;

use crate::{message::Message, Error, Result};

impl Message {
    /// Convert the message into a MIME message builder.
    ///
    /// Attachment contents are read at this point, and path
    /// attachments added without content type get it guessed from
    /// their contents. Headers the
    /// builder does not know about (`Message-ID`, `Date`, `From`)
    /// are left to the caller.
    pub fn to_msg_builder(&self) -> Result<MessageBuilder<'_>> {
        let mut builder = MessageBuilder::new();

        if !self.recipients.is_empty() {
            builder = builder.to(to_address_list(&self.recipients));
        }

        if !self.recipients_cc.is_empty() {
            builder = builder.cc(to_address_list(&self.recipients_cc));
        }

        if !self.recipients_bcc.is_empty() {
            builder = builder.bcc(to_address_list(&self.recipients_bcc));
        }

        builder = builder.subject(self.subject.as_str());

        builder = if self.is_html {
            builder.html_body(self.body.as_str())
        } else {
            builder.text_body(self.body.as_str())
        };

        for attachment in &self.attachments {
            let filename = attachment.filename().unwrap_or("noname");
            let contents = attachment.read_contents()?;
            let mime = attachment.mime_or_guess(&contents).to_owned();
            let contents: BodyPart<'_> = match contents {
                Cow::Borrowed(contents) => contents.into(),
                Cow::Owned(contents) => contents.into(),
            };

            debug!("adding attachment {filename} ({mime})");
            builder = builder.attachment(mime, filename, contents);
        }

        Ok(builder)
    }

    /// Render the message as a MIME message [String].
    pub fn to_mime_string(&self) -> Result<String> {
        self.to_msg_builder()?
            .write_to_string()
            .map_err(Error::WriteMimeMessageError)
    }

    /// Render the message as a MIME message [Vec].
    pub fn to_mime_vec(&self) -> Result<Vec<u8>> {
        self.to_msg_builder()?
            .write_to_vec()
            .map_err(Error::WriteMimeMessageError)
    }
}

fn to_address_list(addresses: &[String]) -> Address<'_> {
    Address::new_list(
        addresses
            .iter()
            .map(|address| Address::from(address.as_str()))
            .collect(),
    )
}
