use thiserror::Error;

// Re-export a simple Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Every failure the parsing layer and its configuration can surface.
#[derive(Error, Debug)]
pub enum Error {
    // ---- Parsing ------------------------------------------------------------
    /// Structural, format and business-rule failures while turning a line of
    /// user input into a command. The message is shown to the user verbatim.
    #[error("{0}")]
    InvalidInput(String),

    // ---- Config -------------------------------------------------------------
    /// Any issue reading or validating the vocabulary configuration.
    #[error("Config error: {0}")]
    Config(String),

    // ---- Plumbing / Wrappers ------------------------------------------------
    /// IO passthrough (config file, log directory).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serde JSON passthrough (config decode).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ----------------------- Convenience constructors ----------------------------

impl Error {
    /// Helper to create an invalid input error from any displayable value.
    pub fn invalid<S: Into<String>>(msg: S) -> Self {
        Error::InvalidInput(msg.into())
    }
    /// Helper to create a generic config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }
}

// ----------------------- Small result helpers --------------------------------

/// Map an `Option<T>` into `Result<T, Error::InvalidInput>` with a custom message.
pub fn require_input<T, S: Into<String>>(opt: Option<T>, msg: S) -> Result<T> {
    opt.ok_or_else(|| Error::InvalidInput(msg.into()))
}
