use crate::cryptography::rng::rng;
use crate::cryptography::rsa::{self, JsonFileStore, KeyStore};
use num_bigint::BigUint;

mod cryptography;
mod util;

pub fn main() {
    let mut store = JsonFileStore::new("rsa_parameters.json");
    if store.exists() {
        println!("Loading RSA parameters from rsa_parameters.json");
    } else {
        println!("Generating RSA parameters with 512-bit primes");
    }

    let pair = rsa::generate_keys(512, &mut store, &mut rng!()).expect("key setup failed");

    println!("public key (n, e):  {}", pair.public);
    println!("private key (n, d): {}", pair.private);

    let message = BigUint::from(476931823457909u64);
    let cipher = pair
        .public
        .encrypt(&message)
        .expect("message must be below the modulus");

    let recovered = pair
        .private
        .decrypt_checked(&cipher)
        .expect("decryption paths disagree");

    println!("message:    {message}");
    println!("ciphertext: {cipher}");
    println!("recovered:  {recovered}");

    let (crt_time, _) = util::time(|| pair.private.decrypt_crt(&cipher));
    let (direct_time, _) = util::time(|| pair.private.decrypt_direct(&cipher));

    println!("decryption via CRT:            {crt_time:?}");
    println!("decryption via direct modpow:  {direct_time:?}");
}
