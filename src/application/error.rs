use thiserror::Error;

/// Failure talking to a block source (node RPC or fixture directory).
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("decode error: {0}")]
    Decode(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("height {0} not available")]
    NotFound(i64),
}

impl From<reqwest::Error> for SourceError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            SourceError::Decode(e.to_string())
        } else {
            SourceError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(e: serde_json::Error) -> Self {
        SourceError::Decode(e.to_string())
    }
}

/// Failure decoding raw transaction bytes into a signed transaction.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("protobuf decode error: {0}")]
    Proto(#[from] prost::DecodeError),

    #[error("malformed transaction: {0}")]
    Malformed(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to fetch block {height}: {source}")]
    BlockFetchFailed {
        height: i64,
        #[source]
        source: SourceError,
    },

    #[error("failed to fetch block results {height}: {source}")]
    BlockResultsFetchFailed {
        height: i64,
        #[source]
        source: SourceError,
    },

    #[error("block {height} has {txs} txs but {results} results")]
    StructuralMismatch {
        height: i64,
        txs: usize,
        results: usize,
    },

    #[error("failed to query latest height: {0}")]
    LatestHeight(#[source] SourceError),

    #[error("tx {index} of block {height} has no unique tx id")]
    TxIdOverflow { height: i64, index: usize },

    #[error("no support module: {0}")]
    UnknownModule(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("sink error: {0}")]
    Sink(String),
}

pub type AppResult<T> = Result<T, AppError>;
