use once_cell::sync::Lazy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Mutex;

/// Process-wide randomness source, used by the driver binary.
///
/// Every function that consumes randomness also takes an explicit
/// `&mut impl Rng`, so callers that need a reproducible prime-search
/// trajectory (tests, debugging) pass their own seeded `ChaCha8Rng`
/// instead of this one.
pub static RNG: Lazy<Mutex<ChaCha8Rng>> = Lazy::new(|| Mutex::new(ChaCha8Rng::from_entropy()));

macro_rules! rng {
    () => {
        *crate::cryptography::rng::RNG.lock().unwrap()
    };
}

pub(crate) use rng;
