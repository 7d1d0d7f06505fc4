use messaging::{AttachmentInputKind, Error, Message, MessageBuilder, Platform};

const BLANKS: [&str; 5] = ["", " ", "   ", "\t", "\r\n "];

#[test_log::test]
fn end_to_end() {
    let msg = MessageBuilder::new()
        .to("a@x.com")
        .cc_all(["b@x.com", "c@x.com"])
        .subject("Hi")
        .body("Hello")
        .build();

    assert_eq!(msg.recipients(), &["a@x.com".to_owned()]);
    assert_eq!(
        msg.recipients_cc(),
        &["b@x.com".to_owned(), "c@x.com".to_owned()]
    );
    assert!(msg.recipients_bcc().is_empty());
    assert_eq!(msg.subject(), "Hi");
    assert_eq!(msg.body(), "Hello");
    assert!(!msg.is_html());
    assert!(msg.attachments().is_empty());
}

#[test_log::test]
fn empty_message_builds() {
    let msg = MessageBuilder::new().build();
    assert_eq!(msg, Message::default());
}

#[test_log::test]
fn blank_single_addresses_are_ignored() {
    let mut builder = MessageBuilder::new().to("a@x.com").cc("b@x.com").bcc("c@x.com");

    for blank in BLANKS {
        builder.add_to(blank);
        builder.add_cc(blank);
        builder.add_bcc(blank);
    }

    let msg = builder.build();
    assert_eq!(msg.recipients().len(), 1);
    assert_eq!(msg.recipients_cc().len(), 1);
    assert_eq!(msg.recipients_bcc().len(), 1);
}

#[test_log::test]
fn single_addresses_are_appended_in_order() {
    let msg = MessageBuilder::new()
        .to("a@x.com")
        .to("b@x.com")
        .cc("c@x.com")
        .cc("d@x.com")
        .bcc("e@x.com")
        .bcc(" f@x.com ")
        .build();

    assert_eq!(msg.recipients(), &["a@x.com", "b@x.com"]);
    assert_eq!(msg.recipients_cc(), &["c@x.com", "d@x.com"]);
    // non-blank addresses are stored as given
    assert_eq!(msg.recipients_bcc(), &["e@x.com", " f@x.com "]);
}

#[test_log::test]
fn collection_addresses_are_appended_unfiltered() {
    let msg = MessageBuilder::new()
        .to("a@x.com")
        .to_all(["b@x.com", "", " "])
        .cc_all(vec!["", "c@x.com"])
        .bcc_all([String::from("\t")])
        .build();

    assert_eq!(msg.recipients(), &["a@x.com", "b@x.com", "", " "]);
    assert_eq!(msg.recipients_cc(), &["", "c@x.com"]);
    assert_eq!(msg.recipients_bcc(), &["\t"]);
}

#[test_log::test]
fn empty_subject_is_ignored() {
    let builder = MessageBuilder::new().subject("X").subject("");
    assert_eq!(builder.build().subject(), "X");

    let builder = builder.subject("Y");
    assert_eq!(builder.build().subject(), "Y");
}

#[test_log::test]
fn whitespace_subject_is_kept() {
    let msg = MessageBuilder::new().subject("X").subject(" ").build();
    assert_eq!(msg.subject(), " ");
}

#[test_log::test]
fn empty_body_is_ignored() {
    let msg = MessageBuilder::for_platform(Platform::Android)
        .body_as_html("<p>x</p>")
        .unwrap()
        .body("")
        .build();

    assert_eq!(msg.body(), "<p>x</p>");
    assert!(msg.is_html());
}

#[test_log::test]
fn plain_body_resets_html_flag() {
    let msg = MessageBuilder::for_platform(Platform::Ios)
        .body_as_html("<p>x</p>")
        .unwrap()
        .body("plain")
        .build();

    assert_eq!(msg.body(), "plain");
    assert!(!msg.is_html());
}

#[test_log::test]
fn empty_html_body_is_ignored() {
    let msg = MessageBuilder::for_platform(Platform::Android)
        .body("plain")
        .body_as_html("")
        .unwrap()
        .build();

    assert_eq!(msg.body(), "plain");
    assert!(!msg.is_html());
}

#[test_log::test]
fn html_body_not_supported() {
    for platform in [Platform::Windows, Platform::Other] {
        let mut builder = MessageBuilder::for_platform(platform)
            .to("a@x.com")
            .body("plain");
        let before = builder.build();

        let err = builder.set_body_as_html("<p>x</p>").unwrap_err();

        assert!(err.is_platform_not_supported());
        assert!(matches!(err, Error::HtmlBodyNotSupportedError(p) if p == platform));
        assert!(err.to_string().contains("supports_html_body"));
        assert_eq!(builder.build(), before);
    }
}

#[test_log::test]
fn attachments_not_supported() {
    let mut builder = MessageBuilder::for_platform(Platform::Other).subject("Hi");
    let before = builder.build();

    let err = builder
        .add_attachment("/tmp/report.pdf", "application/pdf")
        .unwrap_err();
    assert!(matches!(
        err,
        Error::AttachmentsNotSupportedError(Platform::Other)
    ));
    assert!(err.to_string().contains("supports_attachments"));

    let err = builder.add_attachment_path("/tmp/report.pdf").unwrap_err();
    assert!(err.is_platform_not_supported());

    let err = builder
        .add_attachment_stream("hello.txt", &b"Hello"[..], "text/plain")
        .unwrap_err();
    assert!(err.is_platform_not_supported());

    assert_eq!(builder.build(), before);
}

#[test_log::test]
fn attachment_input_kinds_per_platform() {
    let err = MessageBuilder::for_platform(Platform::Ios)
        .with_attachment_path("/tmp/report.pdf")
        .unwrap_err();
    assert!(matches!(
        err,
        Error::AttachmentInputNotSupportedError(AttachmentInputKind::Path, Platform::Ios)
    ));

    let err = MessageBuilder::for_platform(Platform::Windows)
        .with_attachment_stream("hello.txt", b"Hello".to_vec(), "text/plain")
        .unwrap_err();
    assert!(matches!(
        err,
        Error::AttachmentInputNotSupportedError(AttachmentInputKind::Stream, Platform::Windows)
    ));

    let msg = MessageBuilder::for_platform(Platform::Android)
        .with_attachment("/tmp/report.pdf", "application/pdf")
        .unwrap()
        .with_attachment_path("/tmp/notes.bin")
        .unwrap()
        .build();
    assert_eq!(msg.attachments().len(), 2);
    assert_eq!(msg.attachments()[0].mime(), "application/pdf");
    assert_eq!(msg.attachments()[0].filename(), Some("report.pdf"));
    assert_eq!(msg.attachments()[1].filename(), Some("notes.bin"));

    let msg = MessageBuilder::for_platform(Platform::Ios)
        .with_attachment("/tmp/report.pdf", "application/pdf")
        .unwrap()
        .with_attachment_stream("hello.txt", b"Hello".to_vec(), "text/plain")
        .unwrap()
        .build();
    assert_eq!(msg.attachments().len(), 2);
    assert_eq!(msg.attachments()[1].filename(), Some("hello.txt"));
    assert_eq!(msg.attachments()[1].mime(), "text/plain");
}

#[test_log::test]
fn build_twice_returns_equal_messages() {
    let builder = MessageBuilder::for_platform(Platform::Ios)
        .to("a@x.com")
        .bcc("b@x.com")
        .subject("Hi")
        .body_as_html("<p>Hello</p>")
        .unwrap()
        .with_attachment_stream("hello.txt", b"Hello".to_vec(), "text/plain")
        .unwrap();

    assert_eq!(builder.build(), builder.build());
}

#[test_log::test]
fn built_message_is_a_snapshot() {
    let mut builder = MessageBuilder::new().to("a@x.com").subject("Hi");
    let msg = builder.build();

    builder.add_to("b@x.com");
    builder.set_subject("Bye");

    assert_eq!(msg.recipients(), &["a@x.com"]);
    assert_eq!(msg.subject(), "Hi");
    assert_eq!(builder.build().recipients(), &["a@x.com", "b@x.com"]);
}
