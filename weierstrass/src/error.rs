//! Error type

use alloc::string::String;

/// Result type with the `weierstrass` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors surfaced by curve construction, point decoding, validation and
/// scalar generation.
///
/// Arithmetic on degenerate inputs (the point at infinity, 2-torsion points)
/// is not an error and never produces one.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Encoded point does not parse into a well-formed point.
    #[error("malformed point encoding: {0}")]
    MalformedEncoding(&'static str),

    /// The cryptographically secure random source failed.
    #[error("secure entropy source failure: {0}")]
    EntropySourceFailure(String),

    /// Point does not satisfy the curve equation.
    #[error("point is not on the curve")]
    InvalidPoint,

    /// Domain parameters (or a sampling bound) are unusable.
    #[error("invalid curve parameters: {0}")]
    InvalidParameters(&'static str),
}
