use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Http(#[from] ureq::Error),
    #[error("remote returned status {status} for {uri}")]
    Status { uri: String, status: u16 },
    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("response is missing the {0} header")]
    MissingHeader(&'static str),
}

/// Transport used by entities and collections to talk to a Redfish service.
///
/// Implementations own authentication, TLS and timeouts. Resource URIs are
/// passed as found in documents (usually absolute paths like `/redfish/v1/...`).
/// Clients are shared by reference across collection fetch workers.
pub trait RemoteClient: Sync {
    fn get(&self, uri: &str) -> Result<Vec<u8>, ClientError>;

    fn patch(&self, uri: &str, payload: &[u8]) -> Result<(), ClientError>;
}
