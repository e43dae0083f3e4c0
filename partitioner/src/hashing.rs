use murmur2::{murmur2, KAFKA_SEED};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use strum::{Display, EnumString};
use twox_hash::XxHash32;

const FNV_OFFSET_BASIS_32: u32 = 0x811c_9dc5;
const FNV_PRIME_32: u32 = 0x0100_0193;

/// A 32-bit hash computation. A new instance is created for every key,
/// so the implementations never carry any state between messages.
pub trait Hasher32: Send {
    fn write(&mut self, bytes: &[u8]);

    fn sum32(&self) -> u32;
}

/// Creates a fresh hasher for each calculated partition.
pub type HasherFactory = Arc<dyn Fn() -> Box<dyn Hasher32> + Send + Sync>;

#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
pub enum HashAlgorithm {
    #[default]
    #[serde(rename = "fnv1a")]
    #[strum(serialize = "fnv1a")]
    Fnv1a,
    #[serde(rename = "xxhash32")]
    #[strum(serialize = "xxhash32")]
    Xxhash32,
    #[serde(rename = "crc32")]
    #[strum(serialize = "crc32")]
    Crc32,
    #[serde(rename = "murmur2")]
    #[strum(serialize = "murmur2")]
    Murmur2,
}

impl HashAlgorithm {
    pub fn create_hasher(&self) -> Box<dyn Hasher32> {
        match self {
            HashAlgorithm::Fnv1a => Box::<Fnv1a32>::default(),
            HashAlgorithm::Xxhash32 => Box::<Xxhash32Hasher>::default(),
            HashAlgorithm::Crc32 => Box::<Crc32Hasher>::default(),
            HashAlgorithm::Murmur2 => Box::<Murmur2Hasher>::default(),
        }
    }

    pub fn factory(self) -> HasherFactory {
        Arc::new(move || self.create_hasher())
    }
}

/// Returns the default hasher factory (FNV-1a, 32-bit).
pub fn default_hasher() -> HasherFactory {
    HashAlgorithm::Fnv1a.factory()
}

/// FNV-1a, 32-bit.
#[derive(Debug, Clone)]
pub struct Fnv1a32 {
    state: u32,
}

impl Default for Fnv1a32 {
    fn default() -> Self {
        Self {
            state: FNV_OFFSET_BASIS_32,
        }
    }
}

impl Hasher32 for Fnv1a32 {
    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.state ^= *byte as u32;
            self.state = self.state.wrapping_mul(FNV_PRIME_32);
        }
    }

    fn sum32(&self) -> u32 {
        self.state
    }
}

#[derive(Debug, Default, Clone)]
pub struct Xxhash32Hasher {
    buffer: Vec<u8>,
}

impl Hasher32 for Xxhash32Hasher {
    fn write(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    fn sum32(&self) -> u32 {
        XxHash32::oneshot(0, &self.buffer)
    }
}

/// CRC32 using the IEEE polynomial.
#[derive(Default, Clone)]
pub struct Crc32Hasher {
    hasher: crc32fast::Hasher,
}

impl Hasher32 for Crc32Hasher {
    fn write(&mut self, bytes: &[u8]) {
        self.hasher.update(bytes);
    }

    fn sum32(&self) -> u32 {
        self.hasher.clone().finalize()
    }
}

/// Murmur2 seeded the same way as the Java client's default partitioner.
#[derive(Debug, Default, Clone)]
pub struct Murmur2Hasher {
    buffer: Vec<u8>,
}

impl Hasher32 for Murmur2Hasher {
    fn write(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    fn sum32(&self) -> u32 {
        murmur2(&self.buffer, KAFKA_SEED)
    }
}
