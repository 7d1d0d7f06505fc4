//! # Mailto
//!
//! Module dedicated to `mailto:` URL export, as defined in the
//! [RFC6068](https://www.rfc-editor.org/rfc/rfc6068). This is how a
//! message reaches the mail composer of platforms without HTML body
//! nor attachment support: the URL is opened by the system, which
//! hands it to the default mail client.

use tracing::debug;

use crate::message::Message;

impl Message {
    /// Render the message as a `mailto:` URL.
    ///
    /// Blank addresses and empty fields are skipped. Attachments and
    /// the HTML flag cannot be expressed by a `mailto:` URL, they are
    /// dropped.
    pub fn to_mailto_url(&self) -> String {
        if !self.attachments.is_empty() {
            debug!("dropping {} attachment(s) from mailto url", self.attachments.len());
        }

        if self.is_html {
            debug!("dropping html flag from mailto url");
        }

        let mut url = String::from("mailto:");
        url.push_str(&encode_addresses(&self.recipients));

        let mut fields = Vec::new();

        let cc = encode_addresses(&self.recipients_cc);
        if !cc.is_empty() {
            fields.push(format!("cc={cc}"));
        }

        let bcc = encode_addresses(&self.recipients_bcc);
        if !bcc.is_empty() {
            fields.push(format!("bcc={bcc}"));
        }

        if !self.subject.is_empty() {
            fields.push(format!("subject={}", urlencoding::encode(&self.subject)));
        }

        if !self.body.is_empty() {
            // line breaks must be encoded as CRLF
            let body = self.body.replace("\r\n", "\n").replace('\n', "\r\n");
            fields.push(format!("body={}", urlencoding::encode(&body)));
        }

        if !fields.is_empty() {
            url.push('?');
            url.push_str(&fields.join("&"));
        }

        url
    }
}

fn encode_addresses(addresses: &[String]) -> String {
    addresses
        .iter()
        .map(|address| address.trim())
        .filter(|address| !address.is_empty())
        .map(|address| urlencoding::encode(address).replace("%40", "@"))
        .collect::<Vec<_>>()
        .join(",")
}
