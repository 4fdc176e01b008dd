use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("NNG error: {0}")]
    Nng(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Receive task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl From<(nng::Message, nng::Error)> for ServerError {
    fn from(err: (nng::Message, nng::Error)) -> Self {
        ServerError::Nng(err.1.to_string())
    }
}

impl From<nng::Error> for ServerError {
    fn from(err: nng::Error) -> Self {
        ServerError::Nng(err.to_string())
    }
}
