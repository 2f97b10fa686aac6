use super::error::{RsaError, RsaResult};
use num_bigint::BigUint;
use std::fmt::Display;

#[derive(Debug)]
pub struct PublicKey {
    pub n: BigUint,
    pub e: BigUint,
}

impl PublicKey {
    pub fn new(n: BigUint, e: BigUint) -> Self {
        Self { n, e }
    }

    /// Encrypts a message representative: `c = m^e mod n`.
    ///
    /// The representative must already be an integer in `[0, n)`; larger
    /// values are rejected rather than silently reduced.
    pub fn encrypt(&self, message_plain: &BigUint) -> RsaResult<BigUint> {
        if message_plain >= &self.n {
            return Err(RsaError::MessageOutOfRange);
        }

        Ok(message_plain.modpow(&self.e, &self.n))
    }
}

impl Display for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.n, self.e)
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.n == other.n && self.e == other.e
    }
}

impl Eq for PublicKey {}
