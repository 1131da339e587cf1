//! Builds the JSON "hello" message and prints it the way a transport would
//! put it on the wire: status line, headers, blank line, body.
//!
//! The `@id` of the message is taken from `HTTP_HOST` and `REQUEST_URI`, the
//! `Server` header from `SERVER_SOFTWARE`. Run with `RUST_LOG=debug` to see
//! what the library logs.

use gosub_http::{Message, MessageConfig, Response, Uri};
use std::env;
use time::macros::format_description;
use time::OffsetDateTime;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = MessageConfig::builder()
        .server(env::var("SERVER_SOFTWARE").unwrap_or_else(|_| "Gosub/1.0".to_string()))
        .build()?;

    let host = env::var("HTTP_HOST").unwrap_or_else(|_| "localhost:8080".to_string());
    let request_uri = env::var("REQUEST_URI").unwrap_or_else(|_| "/".to_string());
    let id = Uri::parse(&format!("http://{host}{request_uri}"))?;

    let now = OffsetDateTime::now_utc();
    let http_date = format_description!(
        "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
    );
    let clock = format_description!("[hour]:[minute]:[second] UTC");

    let message = serde_json::json!({
        "@id": id,
        "to": "Pillr",
        "subject": "Hello Pillr",
        "message": "Here is my submission",
        "from": "Gosub",
        "timeSent": now.format(clock)?,
    });

    let resp = Response::json(&config, &message)?.with_header("date", &now.format(http_date)?)?;
    log::info!("{} ({} bytes)", resp.status_line(), resp.body().len());

    println!("{}", resp.status_line());
    for (name, value) in resp.headers() {
        println!("{}: {}", name, value.to_str().unwrap_or_default());
    }
    println!();
    println!("{}", String::from_utf8_lossy(resp.body()));

    Ok(())
}
