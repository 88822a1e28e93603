use thiserror::Error;

/// Failure taxonomy for the gateway.
///
/// Every error is reported synchronously to the caller of the originating
/// request; nothing is retried or deferred.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Required process configuration is missing or unusable.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The upstream provider answered with a non-2xx status. Status and
    /// body are preserved so the caller sees what the provider said.
    #[error("upstream returned status {status}")]
    Upstream { status: u16, body: String },

    /// The upstream request never produced a response (timeout, DNS,
    /// connection reset).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(String),

    /// The store could not be reached at all.
    #[error("service unavailable: {0}")]
    Unavailable(String),

    /// The store answered but the operation failed.
    #[error("storage error: {0}")]
    Storage(String),
}

impl GatewayError {
    /// Classify a sqlx failure: connection-level problems surface as
    /// `Unavailable`, everything else as `Storage`.
    pub(crate) fn from_sqlx(context: &str, err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_) => {
                GatewayError::Unavailable(format!("{context}: {err}"))
            }
            _ => GatewayError::Storage(format!("{context}: {err}")),
        }
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
