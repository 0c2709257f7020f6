use thiserror::Error;

use crate::interfaces::ClientError;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Transport(#[from] ClientError),
    #[error("could not decode resource: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("could not encode update payload: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("resource has no @odata.id to send updates to")]
    MissingUri,
}
