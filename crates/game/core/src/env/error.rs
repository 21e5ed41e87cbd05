//! Errors surfaced when a required oracle is missing from the environment.

/// Raised when the action pipeline needs an oracle the caller did not
/// provide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    #[error("catalog oracle not available in environment")]
    CatalogNotAvailable,

    #[error("config oracle not available in environment")]
    ConfigNotAvailable,

    #[error("rng oracle not available in environment")]
    RngNotAvailable,
}
