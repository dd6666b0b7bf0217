pub mod client;
pub mod endpoint;
pub mod error;
pub mod response;

pub use client::{Client, Config};
pub use error::Error;
