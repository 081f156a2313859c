use thiserror::Error;

/// Errors surfaced at the crate's boundaries. The computation core itself
/// has no fallible operations — it degrades to defaults instead of failing.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BijakError {
    /// Builder encountered invalid or missing configuration.
    #[error("builder error: {0}")]
    Builder(String),

    /// Draft record could not be serialized or deserialized.
    #[error("persistence error: {0}")]
    Persistence(String),
}
