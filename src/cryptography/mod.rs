pub mod rng;
pub mod rsa;
