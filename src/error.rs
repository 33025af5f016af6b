//! Error types for the persona pipeline.

/// Top-level error type for the persona engine.
#[derive(Debug, thiserror::Error)]
pub enum PersonaError {
    /// Classifier artifact load or validation error.
    #[error("artifact error: {0}")]
    Artifact(String),

    /// Classification error (untrained model, bad prediction).
    #[error("classifier error: {0}")]
    Classifier(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Expression gallery error.
    #[error("gallery error: {0}")]
    Gallery(String),

    /// Speech synthesis error.
    #[error("synthesis error: {0}")]
    Synthesis(String),

    /// Microphone capture / transcription error.
    #[error("capture error: {0}")]
    Capture(String),

    /// Channel send/receive error.
    #[error("channel error: {0}")]
    Channel(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, PersonaError>;
