pub mod net;
pub mod config;
pub mod errors;

pub use config::MessageConfig;
pub use errors::HttpError;
pub use net::{Message, Response, Uri};
