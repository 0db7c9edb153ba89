pub mod error;
pub mod models;
mod parse;

pub use error::ProxyError;
pub use models::{Proxy, ProxyKind};
