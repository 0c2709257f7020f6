pub mod common;
pub mod config;
pub mod constants;
pub mod error;
pub mod interfaces;
pub mod redfish;

pub use common::{CollectionError, CollectionFetcher, CollectionResult, Entity, Resource};
pub use config::ClientConfig;
pub use error::Error;
pub use interfaces::{ClientError, HttpClient, RemoteClient};
