use messaging::{MessageBuilder, Platform};

fn main() {
    tracing_subscriber::fmt::init();

    let platform = Platform::current();
    let capabilities = platform.capabilities();

    let mut builder = MessageBuilder::for_platform(platform)
        .to("alice@localhost")
        .cc_all(["bob@localhost", "carol@localhost"])
        .subject("Hello")
        .body("Hello, world!");

    if capabilities.supports_html_body {
        builder
            .set_body_as_html("<h1>Hello, world!</h1>")
            .expect("html body should be supported");
    }

    let msg = builder.build();

    println!("================================");
    println!("MAILTO URL ({platform})");
    println!("================================");
    println!();
    println!("{}", msg.to_mailto_url());
    println!();

    println!("================================");
    println!("MIME MESSAGE ({platform})");
    println!("================================");
    println!();
    println!("{}", msg.to_mime_string().expect("message should render"));
}
