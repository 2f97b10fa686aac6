use num_bigint::BigUint;
use thiserror::Error;

/// Failure conditions of key generation, decryption and persistence.
///
/// None of these are retried internally; the only retry loop in the crate is
/// the prime-candidate search.
#[derive(Debug, Error)]
pub enum RsaError {
    /// A candidate below 3 was handed to the primality tester.
    #[error("primality test requires n >= 3, got {0}")]
    InvalidCandidate(BigUint),

    /// The configured public exponent failed the range or coprimality gate
    /// against the totient. The exponent is a fixed choice that is never
    /// adapted to the generated primes.
    #[error("public exponent {e} is invalid: {reason}")]
    PublicExponentInvalid { e: BigUint, reason: String },

    #[error("{a} has no inverse modulo {modulus}")]
    NotInvertible { a: BigUint, modulus: BigUint },

    /// Message or ciphertext representative was >= n.
    #[error("message representative out of range, must be less than the modulus")]
    MessageOutOfRange,

    /// The persisted key pair could not be read back. Fatal: an existing
    /// store is never replaced by a freshly generated pair.
    #[error("stored key pair is corrupt: {0}")]
    CorruptStore(String),

    #[error("failed to persist key pair: {0}")]
    StoreWriteError(#[source] std::io::Error),

    /// The CRT and direct decryption paths disagree. Indicates a logic
    /// defect in key derivation or one of the exponentiation paths.
    #[error("decryption mismatch: crt={crt}, direct={direct}")]
    DecryptionMismatch { crt: BigUint, direct: BigUint },

    /// A bounded prime search ran out of candidates before finding a
    /// probable prime.
    #[error("no probable prime found within {attempts} candidates")]
    SearchExhausted { attempts: usize },
}

pub type RsaResult<T> = Result<T, RsaError>;
