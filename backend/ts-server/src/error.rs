use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Store error: {0}")]
    Store(#[from] ts_store::StoreError),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
