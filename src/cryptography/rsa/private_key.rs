use super::error::{RsaError, RsaResult};
use num_bigint::BigUint;
use std::fmt::Display;

#[derive(Debug)]
pub struct PrivateKey {
    pub n: BigUint,
    pub d: BigUint,
    pub p: BigUint,
    pub q: BigUint,
}

impl PrivateKey {
    pub fn new(n: BigUint, d: BigUint, p: BigUint, q: BigUint) -> Self {
        Self { n, d, p, q }
    }

    /// Decrypts via one exponentiation over the full modulus:
    /// `m = c^d mod n`. The slower of the two paths, kept as the
    /// correctness oracle.
    pub fn decrypt_direct(&self, cipher: &BigUint) -> RsaResult<BigUint> {
        if cipher >= &self.n {
            return Err(RsaError::MessageOutOfRange);
        }

        Ok(cipher.modpow(&self.d, &self.n))
    }

    /// Decrypts via the Chinese Remainder Theorem: two exponentiations over
    /// the half-size moduli `p` and `q`, recombined with Garner's formula.
    pub fn decrypt_crt(&self, cipher: &BigUint) -> RsaResult<BigUint> {
        if cipher >= &self.n {
            return Err(RsaError::MessageOutOfRange);
        }

        let dp = &self.d % (&self.p - 1u32);
        let dq = &self.d % (&self.q - 1u32);

        let qinv = self
            .q
            .modinv(&self.p)
            .ok_or_else(|| RsaError::NotInvertible {
                a: self.q.clone(),
                modulus: self.p.clone(),
            })?;

        let m1 = cipher.modpow(&dp, &self.p);
        let m2 = cipher.modpow(&dq, &self.q);

        // m1 - m2 may be negative; bring the difference into [0, p) before
        // the modular multiply, since all arithmetic here is unsigned
        let h = qinv * sub_mod(&m1, &m2, &self.p) % &self.p;

        Ok(&m2 + h * &self.q)
    }

    /// Runs both decryption paths and returns the plaintext only if they
    /// agree. A disagreement means the key material or one of the
    /// exponentiation paths is broken.
    pub fn decrypt_checked(&self, cipher: &BigUint) -> RsaResult<BigUint> {
        let direct = self.decrypt_direct(cipher)?;
        let crt = self.decrypt_crt(cipher)?;

        if crt != direct {
            return Err(RsaError::DecryptionMismatch { crt, direct });
        }

        Ok(direct)
    }
}

/// `(a - b) mod m` over unsigned integers: reduce both operands, then step
/// back up by `m` whenever the plain difference would go negative.
fn sub_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    let lhs = a % m;
    let rhs = b % m;

    if lhs >= rhs {
        lhs - rhs
    } else {
        m - (rhs - lhs)
    }
}

impl Display for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.n, self.d)
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.n == other.n && self.d == other.d && self.p == other.p && self.q == other.q
    }
}

impl Eq for PrivateKey {}
