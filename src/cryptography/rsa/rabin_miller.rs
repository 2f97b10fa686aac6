use super::error::{RsaError, RsaResult};
use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand::Rng;

/// Number of independent witness rounds a candidate must survive before the
/// prime generator accepts it. A composite slips through one round with
/// probability at most 1/4, so the false-positive chance is under 4^-7.
pub const DEFAULT_ROUNDS: usize = 7;

/// One candidate under Rabin-Miller evaluation, with the factorization
/// `candidate - 1 = 2^s * d` precomputed so repeated rounds against the same
/// candidate don't redo it.
pub struct RabinMillerTest {
    candidate: BigUint,
    /// candidate - 1, doubling as the exclusive witness bound and the
    /// "minus one" residue the squaring chain is compared against.
    candidate_minus_one: BigUint,
    /// candidate - 1 = 2^s * d, d odd
    d: BigUint,
    /// candidate - 1 = 2^s * d, d odd
    s: u64,
}

/// Verdict of a single witness round. `Composite` is certain;
/// `ProbablePrime` is wrong with probability at most 1/4 per round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primality {
    ProbablePrime,
    Composite,
}

impl Primality {
    pub fn is_probably_prime(&self) -> bool {
        match self {
            Self::ProbablePrime => true,
            Self::Composite => false,
        }
    }
}

impl RabinMillerTest {
    /// Prepares `candidate` for witness rounds.
    ///
    /// Candidates below 4 are rejected as [`RsaError::InvalidCandidate`],
    /// with the exception of 3: no witness `1 < a < n - 1` exists for it, so
    /// every round short-circuits to [`Primality::ProbablePrime`].
    pub fn new(candidate: BigUint) -> RsaResult<Self> {
        if candidate < BigUint::from(3u8) {
            return Err(RsaError::InvalidCandidate(candidate));
        }

        let candidate_minus_one = &candidate - 1u32;
        let s = candidate_minus_one
            .trailing_zeros()
            .expect("candidate > 1, so candidate - 1 is nonzero");
        let d = &candidate_minus_one >> s;

        Ok(RabinMillerTest {
            candidate,
            candidate_minus_one,
            d,
            s,
        })
    }

    /// Runs one witness round with a fresh witness `a` drawn uniformly from
    /// `[2, candidate - 2]`.
    pub fn test_round<R: Rng + ?Sized>(&self, rng: &mut R) -> Primality {
        if self.candidate == BigUint::from(3u8) {
            return Primality::ProbablePrime;
        }

        let a = rng.gen_biguint_range(&BigUint::from(2u8), &self.candidate_minus_one);
        self.test_witness(&a)
    }

    /// Runs one witness round with the given witness. Assumes
    /// `1 < a < candidate - 1`.
    pub fn test_witness(&self, a: &BigUint) -> Primality {
        debug_assert!(
            a > &BigUint::one() && a < &self.candidate_minus_one,
            "witness must satisfy 1 < a < candidate - 1"
        );

        let mut x = a.modpow(&self.d, &self.candidate);

        // a^d = +-1 means every later square is 1; nothing left to disprove.
        if x.is_one() || x == self.candidate_minus_one {
            return Primality::ProbablePrime;
        }

        for _ in 1..self.s {
            x = &x * &x % &self.candidate;

            if x.is_one() {
                // reached 1 through a square root other than +-1
                return Primality::Composite;
            } else if x == self.candidate_minus_one {
                return Primality::ProbablePrime;
            }
        }

        Primality::Composite
    }

    /// Runs `rounds` independent witness rounds and reports whether none of
    /// them proved the candidate composite.
    pub fn is_probable_prime<R: Rng + ?Sized>(&self, rounds: usize, rng: &mut R) -> bool {
        assert!(rounds > 0, "rounds must be at least 1");

        (0..rounds).all(|_| self.test_round(rng).is_probably_prime())
    }
}
