pub mod credentials;
pub mod error;
pub mod http;

mod client;

pub use crate::client::*;
