use thiserror::Error;

/// An Error enum capturing the errors produced by this crate.
#[derive(Error, Debug)]
pub enum Error {
    /// Modulus was zero or negative
    #[error("Modulus must be positive")]
    InvalidModulusError,
    /// Exponent was negative
    #[error("Exponent must be non-negative")]
    NegativeExponentError,
    /// No inverse error
    #[error("No inverse exists error")]
    NoInverseError,
}
