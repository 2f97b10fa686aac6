pub use error::{RsaError, RsaResult};
pub use key_generation::{generate_keys, generate_keys_with_exponent, DEFAULT_PUBLIC_EXPONENT};
pub use key_pair::KeyPair;
pub use prime_generation::{generate_prime, generate_prime_bounded};
pub use private_key::PrivateKey;
pub use public_key::PublicKey;
pub use rabin_miller::{Primality, RabinMillerTest, DEFAULT_ROUNDS};
pub use store::{JsonFileStore, KeyStore, MemoryStore};

mod error;
pub mod key_generation;
mod key_pair;
mod prime_generation;
mod private_key;
mod public_key;
mod rabin_miller;
mod store;
