mod client;
mod http_client;
#[cfg(test)]
pub(crate) mod mock;

pub use client::{ClientError, RemoteClient};
pub use http_client::HttpClient;
