/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors from configuring the engine.
///
/// Round transitions never fail: input that arrives in the wrong phase or
/// while the engine is locked is ignored.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EngineError {
    /// A locale name that has no phrase catalog.
    #[error("unknown locale: {0} (expected 'ja' or 'en')")]
    UnknownLocale(String),
}
