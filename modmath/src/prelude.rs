pub use super::error::Error;
pub use super::euclid::extended_gcd;
pub use super::euclid::mod_inv;
pub use super::euclid::Bezout;
pub use super::pow::mod_pow;
