use super::error::{RsaError, RsaResult};
use super::private_key::PrivateKey;
use super::public_key::PublicKey;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;

/// A complete RSA key pair. The public half is `(e, n)`, the private half
/// keeps the exponent `d` together with the prime factors `p` and `q` so the
/// CRT decryption path can bypass the composite modulus.
#[derive(Debug, PartialEq, Eq)]
pub struct KeyPair {
    pub public: PublicKey,
    pub private: PrivateKey,
}

impl KeyPair {
    /// Derives a key pair from two distinct probable primes and a public
    /// exponent.
    ///
    /// Computes `n = p*q` and `phi(n) = (p-1)(q-1)`, checks
    /// `1 < e < phi(n)` and `gcd(e, phi(n)) = 1`, and determines
    /// `d = e^-1 mod phi(n)`. The exponent is a fixed choice that is never
    /// adapted to `phi(n)`; a failed check is a configuration error
    /// ([`RsaError::PublicExponentInvalid`]).
    pub fn from_primes(p: BigUint, q: BigUint, e: BigUint) -> RsaResult<Self> {
        debug_assert_ne!(p, q, "the two primes must be distinct");

        let n = &p * &q;
        let phi_n = (&p - 1u32) * (&q - 1u32);

        if e <= BigUint::one() || e >= phi_n {
            return Err(RsaError::PublicExponentInvalid {
                e,
                reason: "must lie strictly between 1 and phi(n)".to_string(),
            });
        }

        if e.gcd(&phi_n) != BigUint::one() {
            return Err(RsaError::PublicExponentInvalid {
                e,
                reason: "shares a factor with phi(n)".to_string(),
            });
        }

        // the gcd check above guarantees an inverse exists
        let d = e.modinv(&phi_n).ok_or_else(|| RsaError::NotInvertible {
            a: e.clone(),
            modulus: phi_n.clone(),
        })?;

        Ok(KeyPair {
            public: PublicKey::new(n.clone(), e),
            private: PrivateKey::new(n, d, p, q),
        })
    }
}
