/// Result alias that carries the custom [`SortVizError`] type.
pub type Result<T> = std::result::Result<T, SortVizError>;

/// Common error type for the core crate.
///
/// The algorithm engines themselves never fail; errors only come out of the
/// routing layer (slug lookup), configuration validation and file IO.
#[derive(Debug, thiserror::Error)]
pub enum SortVizError {
    /// Free-form message for conditions without a dedicated variant.
    #[error("{0}")]
    Message(String),
    /// Wrapper around standard IO errors.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// Wrapper around JSON (de)serialisation errors.
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    /// The requested slug does not name a registered algorithm.
    #[error("unknown algorithm `{0}`")]
    UnknownAlgorithm(String),
    #[error("array size {size} is outside the supported range {min}..={max}")]
    InvalidSize { size: usize, min: usize, max: usize },
    #[error("playback speed {speed} is outside the supported range {min}..={max}")]
    InvalidSpeed { speed: u32, min: u32, max: u32 },
    #[error("value range {min}..={max} is empty")]
    InvalidRange { min: i32, max: i32 },
}

impl SortVizError {
    /// Creates a new error that simply wraps the provided message.
    pub fn msg<T: Into<String>>(msg: T) -> Self {
        Self::Message(msg.into())
    }
}

impl From<&str> for SortVizError {
    fn from(value: &str) -> Self {
        Self::msg(value)
    }
}

impl From<String> for SortVizError {
    fn from(value: String) -> Self {
        Self::Message(value)
    }
}
