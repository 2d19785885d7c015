//! Error types for avinfo-probe.

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures that end a probe before a report can be built.
///
/// These never cross [`crate::get_file_info`]; the message travels in
/// [`crate::FileInfoResponse::error`] instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The path is unreadable, or the container header failed to parse.
    #[error("{message}")]
    Open { message: String },

    /// libavformat could not allocate a format context.
    #[error("could not allocate memory for Format Context")]
    Allocation,

    /// The header parsed but stream-info discovery failed.
    #[error("could not get stream info")]
    StreamInfo,
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Open,
    Allocation,
    Probe,
}

impl Error {
    /// The path does not name a readable file.
    pub fn unreadable() -> Self {
        Self::Open {
            message: "cannot open file".to_string(),
        }
    }

    /// Create an open error carrying libav's decoded error text.
    pub fn open(message: impl Into<String>) -> Self {
        Self::Open {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Open { .. } => ErrorKind::Open,
            Error::Allocation => ErrorKind::Allocation,
            Error::StreamInfo => ErrorKind::Probe,
        }
    }
}

impl From<ffmpeg_the_third::Error> for Error {
    fn from(err: ffmpeg_the_third::Error) -> Self {
        Error::open(err.to_string())
    }
}
