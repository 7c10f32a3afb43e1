use crate::error::Error;
use num_integer::Integer;
use num_traits::{One, Zero};

/// Binary square-and-multiply exponentiation: `base^exponent mod modulus`.
///
/// The base is reduced up front, so negative and oversized bases are fine;
/// the result always lands in `[0, modulus)`. A modulus of one collapses
/// everything to zero, including `exponent == 0`.
pub fn mod_pow<T>(base: &T, exponent: &T, modulus: &T) -> Result<T, Error>
where
    T: Integer + Clone,
{
    if *modulus < T::one() {
        return Err(Error::InvalidModulusError);
    }
    if *exponent < T::zero() {
        return Err(Error::NegativeExponentError);
    }

    let two = T::one() + T::one();
    let mut base = base.mod_floor(modulus);
    let mut exp = exponent.clone();
    let mut result = T::one().mod_floor(modulus);

    while exp > T::zero() {
        if exp.is_odd() {
            result = (result * base.clone()).mod_floor(modulus);
        }
        base = (base.clone() * base).mod_floor(modulus);
        exp = exp.div_floor(&two);
    }

    Ok(result)
}
