use modmath::prelude::{mod_inv, mod_pow, Error as MathError};
use num_bigint::{BigInt, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::Rng;
use thiserror::Error;

/// An Error enum capturing the errors produced by this crate.
#[derive(Error, Debug)]
pub enum Error {
    /// Modulus is too small for the demonstration group
    #[error("Modulus must be at least 3, got {0}")]
    ModulusTooSmall(BigInt),
    /// Key shares a factor with the group order
    #[error("Key {0} has no inverse modulo {1}")]
    KeyNotInvertible(BigInt, BigInt),
    /// Value outside the message space
    #[error("Value {0} is not in [0, modulus)")]
    OutOfRange(BigInt),
    /// Error from the modmath crate
    #[error("Arithmetic error")]
    ModMathError(#[from] MathError),
}

/// A toy RSA style exponentiation cipher over a fixed prime modulus.
///
/// Both exponents stay secret in this textbook setup: the key encrypts and
/// the inverse exponent derived from it decrypts. Messages live in
/// `[0, prime)`. The modulus is trusted to be prime, there is no primality
/// check.
#[derive(Clone, Debug)]
pub struct ToyRsa {
    prime: BigInt,
    enc_exp: BigInt,
    dec_exp: BigInt,
}

impl ToyRsa {
    /// Set up the cipher for `prime` and the private `key`.
    ///
    /// The key may be any integer coprime to `prime - 1`; it is reduced into
    /// the exponent group on construction, so both stored exponents end up
    /// in `[1, prime - 1)`.
    pub fn new(prime: BigInt, key: BigInt) -> Result<Self, Error> {
        if prime < BigInt::from(3) {
            return Err(Error::ModulusTooSmall(prime));
        }
        let totient = &prime - BigInt::one();
        let enc_exp = key.mod_floor(&totient);
        let dec_exp = match mod_inv(&key, &totient) {
            Ok(inv) => inv,
            Err(MathError::NoInverseError) => {
                return Err(Error::KeyNotInvertible(key, totient));
            }
            Err(e) => return Err(e.into()),
        };
        tracing::debug!(
            "exponent pair ({}, {}) over group order {}",
            enc_exp,
            dec_exp,
            totient
        );
        Ok(Self {
            prime,
            enc_exp,
            dec_exp,
        })
    }

    /// The prime modulus of the demonstration group.
    pub fn modulus(&self) -> &BigInt {
        &self.prime
    }

    /// The encryption exponent, reduced modulo `prime - 1`.
    pub fn encryption_exponent(&self) -> &BigInt {
        &self.enc_exp
    }

    /// The decryption exponent derived via the extended Euclidean algorithm.
    pub fn decryption_exponent(&self) -> &BigInt {
        &self.dec_exp
    }

    /// Draw a uniform message from `[0, prime)`.
    pub fn random_message<R: Rng>(&self, rng: &mut R) -> BigInt {
        rng.gen_bigint_range(&BigInt::zero(), &self.prime)
    }

    /// Encrypt `message` as `message^key mod prime`.
    pub fn encrypt(&self, message: &BigInt) -> Result<BigInt, Error> {
        self.check_range(message)?;
        let cipher = mod_pow(message, &self.enc_exp, &self.prime)?;
        tracing::debug!("encrypted {} into {}", message, cipher);
        Ok(cipher)
    }

    /// Decrypt `cipher` back into the message space.
    pub fn decrypt(&self, cipher: &BigInt) -> Result<BigInt, Error> {
        self.check_range(cipher)?;
        let message = mod_pow(cipher, &self.dec_exp, &self.prime)?;
        tracing::debug!("decrypted {} into {}", cipher, message);
        Ok(message)
    }

    fn check_range(&self, value: &BigInt) -> Result<(), Error> {
        if value < &BigInt::zero() || value >= &self.prime {
            return Err(Error::OutOfRange(value.clone()));
        }
        Ok(())
    }
}
