pub mod error;
pub mod schemas;

mod client;

pub use client::*;
