use crate::error::Error;
use num_integer::Integer;
use num_traits::{One, Zero};
use std::ops::Mul;

/// Outcome of the extended Euclidean algorithm.
///
/// The coefficients satisfy `gcd == s * r0 + t * r1` for the inputs the
/// algorithm ran on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bezout<T> {
    /// Greatest common divisor of the two inputs
    pub gcd: T,
    /// Coefficient of the first input
    pub s: T,
    /// Coefficient of the second input
    pub t: T,
}

/// Iterative extended Euclid.
///
/// `extended_gcd(a, 0)` yields `(a, 1, 0)` without entering the loop, so the
/// gcd inherits the sign of `a` for negative inputs. The coefficients go
/// negative during the run, so this is meant for signed or arbitrary
/// precision types.
pub fn extended_gcd<T>(mut r0: T, mut r1: T) -> Bezout<T>
where
    T: Integer + Clone + for<'a> Mul<&'a T, Output = T>,
{
    let mut s0 = T::one();
    let mut s1 = T::zero();
    let mut t0 = T::zero();
    let mut t1 = T::one();

    while !r1.is_zero() {
        // div_rem truncates towards zero, which keeps the remainder in step
        // with the coefficient updates for signed inputs as well.
        let (q, r) = r0.div_rem(&r1);
        r0 = r1;
        r1 = r;
        let tmp = s0 - q.to_owned() * &s1;
        s0 = s1;
        s1 = tmp;
        let tmp = t0 - q * &t1;
        t0 = t1;
        t1 = tmp;
    }

    Bezout {
        gcd: r0,
        s: s0,
        t: t0,
    }
}

/// Multiplicative inverse of `a` modulo `modulus`, normalized into
/// `[0, modulus)`.
///
/// `a` is reduced first, so negative and oversized inputs are fine.
pub fn mod_inv<T>(a: &T, modulus: &T) -> Result<T, Error>
where
    T: Integer + Clone + for<'a> Mul<&'a T, Output = T>,
{
    if *modulus < T::one() {
        return Err(Error::InvalidModulusError);
    }
    let reduced = a.mod_floor(modulus);
    let bezout = extended_gcd(reduced, modulus.clone());
    if !bezout.gcd.is_one() {
        return Err(Error::NoInverseError);
    }
    let inv = bezout.s.mod_floor(modulus);
    debug_assert!(
        (a.mod_floor(modulus) * &inv).mod_floor(modulus) == T::one().mod_floor(modulus)
    );
    Ok(inv)
}
