//! HTTP message value objects: [`Uri`], [`Response`] and the shared
//! [`Message`] contract, plus the scheme and status tables they validate
//! against.

pub mod message;
mod response;
pub mod scheme;
pub mod status;
mod uri;

pub use message::Message;
pub use response::Response;
pub use uri::Uri;
