use super::error::{RsaError, RsaResult};
use super::rabin_miller::{RabinMillerTest, DEFAULT_ROUNDS};
use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::One;
use rand::Rng;

/// Generate a probable prime with the given bit length.
///
/// Candidates are drawn uniformly from `[2^(bit_length-1) + 1, 2^bit_length - 1]`
/// (most significant bit always set) and resampled until one survives
/// [`DEFAULT_ROUNDS`] independent Rabin-Miller rounds. The search is
/// unbounded but terminates with probability 1; use
/// [`generate_prime_bounded`] where a runaway search must be able to fail
/// instead of loop.
///
/// `bit_length` must be at least 2.
pub fn generate_prime<R: Rng + ?Sized>(bit_length: u32, rng: &mut R) -> BigUint {
    assert!(bit_length >= 2, "bit_length must be at least 2");

    loop {
        if let Some(prime) = sample_candidate(bit_length, rng) {
            return prime;
        }
    }
}

/// Same search as [`generate_prime`], but gives up with
/// [`RsaError::SearchExhausted`] once `max_candidates` candidates (even ones
/// included) have been sampled without finding a probable prime.
pub fn generate_prime_bounded<R: Rng + ?Sized>(
    bit_length: u32,
    max_candidates: usize,
    rng: &mut R,
) -> RsaResult<BigUint> {
    assert!(bit_length >= 2, "bit_length must be at least 2");

    for _ in 0..max_candidates {
        if let Some(prime) = sample_candidate(bit_length, rng) {
            return Ok(prime);
        }
    }

    Err(RsaError::SearchExhausted {
        attempts: max_candidates,
    })
}

/// Draws one candidate and classifies it: `Some` if it is an odd probable
/// prime, `None` if it was even or failed a witness round.
fn sample_candidate<R: Rng + ?Sized>(bit_length: u32, rng: &mut R) -> Option<BigUint> {
    let low = (BigUint::one() << (bit_length - 1)) + 1u32;
    let high = BigUint::one() << bit_length; // exclusive

    let candidate = rng.gen_biguint_range(&low, &high);

    // even candidates are discarded before any witness round is spent
    if candidate.is_even() {
        return None;
    }

    let test = RabinMillerTest::new(candidate.clone())
        .expect("candidates of >= 2 bits are at least 3");

    if test.is_probable_prime(DEFAULT_ROUNDS, rng) {
        Some(candidate)
    } else {
        None
    }
}
