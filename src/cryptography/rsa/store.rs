use super::error::{RsaError, RsaResult};
use super::key_pair::KeyPair;
use super::private_key::PrivateKey;
use super::public_key::PublicKey;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

/// Persistence backend for a generated key pair.
///
/// `load` is only consulted after `exists` reported true, so a store that is
/// present but unreadable is corrupt rather than missing.
pub trait KeyStore {
    fn exists(&self) -> bool;
    fn load(&self) -> RsaResult<KeyPair>;
    fn save(&mut self, pair: &KeyPair) -> RsaResult<()>;
}

/// Serialized form of a key pair. Every integer is a decimal string because
/// the moduli overflow all native JSON number types.
#[derive(Debug, Serialize, Deserialize)]
struct StoredKeyPair {
    public: StoredPublicKey,
    private: StoredPrivateKey,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredPublicKey {
    e: String,
    n: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredPrivateKey {
    d: String,
    p: String,
    q: String,
}

impl StoredKeyPair {
    fn from_pair(pair: &KeyPair) -> Self {
        StoredKeyPair {
            public: StoredPublicKey {
                e: pair.public.e.to_str_radix(10),
                n: pair.public.n.to_str_radix(10),
            },
            private: StoredPrivateKey {
                d: pair.private.d.to_str_radix(10),
                p: pair.private.p.to_str_radix(10),
                q: pair.private.q.to_str_radix(10),
            },
        }
    }

    fn to_pair(&self) -> RsaResult<KeyPair> {
        let e = parse_field("e", &self.public.e)?;
        let n = parse_field("n", &self.public.n)?;
        let d = parse_field("d", &self.private.d)?;
        let p = parse_field("p", &self.private.p)?;
        let q = parse_field("q", &self.private.q)?;
        Ok(KeyPair {
            public: PublicKey::new(n.clone(), e),
            private: PrivateKey::new(n, d, p, q),
        })
    }
}

fn parse_field(name: &str, digits: &str) -> RsaResult<BigUint> {
    BigUint::from_str(digits)
        .map_err(|_| RsaError::CorruptStore(format!("field `{name}` is not a decimal integer")))
}

/// Key store backed by a single JSON file on disk.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }
}

impl KeyStore for JsonFileStore {
    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn load(&self) -> RsaResult<KeyPair> {
        let contents = fs::read_to_string(&self.path)
            .map_err(|err| RsaError::CorruptStore(format!("unreadable file: {err}")))?;
        let stored: StoredKeyPair = serde_json::from_str(&contents)
            .map_err(|err| RsaError::CorruptStore(err.to_string()))?;
        stored.to_pair()
    }

    fn save(&mut self, pair: &KeyPair) -> RsaResult<()> {
        let stored = StoredKeyPair::from_pair(pair);
        let contents =
            serde_json::to_string_pretty(&stored).expect("key pair records always serialize");
        fs::write(&self.path, contents).map_err(RsaError::StoreWriteError)
    }
}

/// Key store that keeps the serialized record in memory, for tests and
/// callers that do not want anything written to disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    stored: Option<StoredKeyPair>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl KeyStore for MemoryStore {
    fn exists(&self) -> bool {
        self.stored.is_some()
    }

    fn load(&self) -> RsaResult<KeyPair> {
        let stored = self
            .stored
            .as_ref()
            .ok_or_else(|| RsaError::CorruptStore("no key pair stored".to_string()))?;
        stored.to_pair()
    }

    fn save(&mut self, pair: &KeyPair) -> RsaResult<()> {
        self.stored = Some(StoredKeyPair::from_pair(pair));
        Ok(())
    }
}
