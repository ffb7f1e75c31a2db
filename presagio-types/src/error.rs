use thiserror::Error;

/// Unified error type for the presagio workspace.
///
/// This covers argument validation failures, dataset sink I/O failures,
/// payload decode failures, and forecaster-tagged failures. There is no
/// retry or recovery machinery behind any variant; every operation either
/// succeeds or reports one of these.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PresagioError {
    /// An input violated an operation's contract (empty series, non-monotonic
    /// timestamps, bad quantile configuration).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The dataset sink could not be created, written, or flushed.
    #[error("dataset io at {path}: {source}")]
    Io {
        /// Path of the sink, or a generic label for anonymous writers.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A payload could not be decoded (malformed JSON, missing keys, ragged
    /// quantile tables).
    #[error("decode failure: {0}")]
    Decode(String),

    /// A forecaster implementation reported a failure.
    #[error("{forecaster} failed: {msg}")]
    Forecaster {
        /// Name of the forecaster that failed.
        forecaster: String,
        /// Human-readable error message.
        msg: String,
    },
}

impl PresagioError {
    /// Helper: build an `InvalidInput` error.
    #[must_use]
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Helper: build a `Decode` error.
    #[must_use]
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Helper: build an `Io` error tagged with the sink it concerns.
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Helper: build a `Forecaster` error with the forecaster name and message.
    pub fn forecaster(name: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Forecaster {
            forecaster: name.into(),
            msg: msg.into(),
        }
    }
}

impl From<serde_json::Error> for PresagioError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
