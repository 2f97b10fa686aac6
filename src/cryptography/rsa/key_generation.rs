use super::error::RsaResult;
use super::key_pair::KeyPair;
use super::prime_generation::generate_prime;
use super::store::KeyStore;
use num_bigint::BigUint;
use rand::Rng;

/// Default public exponent, `2^16 + 1 = 65537`.
pub const DEFAULT_PUBLIC_EXPONENT: u64 = 65537;

/// Generates the key pair backed by `store`, using the default public
/// exponent. See [`generate_keys_with_exponent`].
pub fn generate_keys<S: KeyStore, R: Rng + ?Sized>(
    bit_length: u32,
    store: &mut S,
    rng: &mut R,
) -> RsaResult<KeyPair> {
    generate_keys_with_exponent(bit_length, BigUint::from(DEFAULT_PUBLIC_EXPONENT), store, rng)
}

/// Produces a key pair whose prime factors are `bit_length` bits each,
/// reusing the pair held by `store` when one exists.
///
/// An existing store is authoritative: a pair that fails to load is an
/// error, never silently replaced by a fresh one. A pair that fails to
/// *save* is still returned; the write error only costs persistence.
pub fn generate_keys_with_exponent<S: KeyStore, R: Rng + ?Sized>(
    bit_length: u32,
    e: BigUint,
    store: &mut S,
    rng: &mut R,
) -> RsaResult<KeyPair> {
    if store.exists() {
        return store.load();
    }

    //?  (1) Choose two distinct prime numbers p and q
    let (p, q) = generate_p_and_q(bit_length, rng);

    //?  (2)-(5) Compute n = pq and phi(n), check e against it, determine d
    let pair = KeyPair::from_primes(p, q, e)?;

    //?  (6) Persist the pair for later runs
    if let Err(err) = store.save(&pair) {
        eprintln!("Warning: failed to save key pair: {err}");
    }

    Ok(pair)
}

/// Generates the two prime factors, resampling `q` until it differs from `p`.
fn generate_p_and_q<R: Rng + ?Sized>(bit_length: u32, rng: &mut R) -> (BigUint, BigUint) {
    let p = generate_prime(bit_length, rng);
    let mut q = generate_prime(bit_length, rng);

    while q == p {
        q = generate_prime(bit_length, rng);
    }

    (p, q)
}
