//! Cross-platform library to prepare email messages for native mail
//! composers.
//!
//! This library does not send emails. It helps you to assemble a
//! read-only [`Message`] (recipients, subject, body, attachments)
//! that a platform-owned mail composer then presents to the user.
//!
//! The core concept of this library is the [`MessageBuilder`], which
//! follows these rules:
//!
//! 1. Blank inputs are silently ignored: blank single addresses,
//! empty subjects and empty bodies do not reset previous values.
//!
//! 2. Native mail composers do not support the same features on
//! every platform. Operations like HTML bodies or attachments always
//! exist, but fail on platforms lacking them. Use
//! [`MessageBuilder::capabilities`] to check availability first.
//!
//! 3. Attachments are lightweight descriptors: file bytes are never
//! copied into the message. On sandboxed platforms, files should be
//! resolved ahead of time using the [`FileResolver`].
//!
//! ```rust
//! use messaging::{MessageBuilder, Platform};
//!
//! let msg = MessageBuilder::for_platform(Platform::Android)
//!     .to("a@x.com")
//!     .cc_all(["b@x.com", "c@x.com"])
//!     .subject("Hi")
//!     .body("Hello")
//!     .build();
//!
//! assert_eq!(msg.recipients(), ["a@x.com"]);
//! assert_eq!(msg.subject(), "Hi");
//! assert!(!msg.is_html());
//! ```

pub mod attachment;
pub mod builder;
pub mod config;
pub mod error;
#[cfg(feature = "mailto")]
pub mod mailto;
pub mod message;
#[cfg(feature = "mime")]
pub mod mime;
pub mod platform;
#[cfg(feature = "tokio")]
pub mod resolver;

#[doc(inline)]
pub use self::{
    attachment::{Attachment, AttachmentSource, FileHandle},
    builder::MessageBuilder,
    config::MessagingConfig,
    error::{Error, Result},
    message::Message,
    platform::{AttachmentInputKind, Platform, PlatformCapabilities},
};
#[cfg(feature = "tokio")]
#[doc(inline)]
pub use self::resolver::FileResolver;
