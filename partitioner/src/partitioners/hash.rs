use crate::error::Error;
use crate::hashing::{default_hasher, HashAlgorithm, HasherFactory};
use crate::message::ProducerMessage;
use crate::partitioners::random::RandomPartitioner;
use crate::partitioners::{validate_partitions_count, Partitioner};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};
use std::sync::Arc;
use strum::{Display, EnumString};
use tracing::trace;

/// Derives the bytes to be hashed from the message. Only invoked for messages with a key.
pub type KeyBytesExtractor = Arc<dyn Fn(&ProducerMessage) -> Result<Bytes, Error> + Send + Sync>;

/// Describes how the 32-bit hash is mapped onto the partitions range.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SignHandling {
    /// The hash is treated as a signed integer and its absolute value is used.
    /// The absolute value of `i32::MIN` is treated as 0.
    #[default]
    Absolute,
    /// The sign bit is cleared, as the reference Java client does.
    MaskSignBit,
    /// The hash is treated as an unsigned integer.
    Unsigned,
}

impl SignHandling {
    pub fn to_partition(&self, hash: u32, partitions_count: i32) -> Result<i32, Error> {
        validate_partitions_count(partitions_count)?;
        let partition = match self {
            SignHandling::Absolute => {
                let hash = hash as i32;
                let absolute = if hash == i32::MIN { 0 } else { hash.abs() };
                absolute % partitions_count
            }
            SignHandling::MaskSignBit => (hash & 0x7fff_ffff) as i32 % partitions_count,
            SignHandling::Unsigned => (hash % partitions_count as u32) as i32,
        };
        Ok(partition)
    }
}

/// Encodes the message key as is.
pub fn encode_key(message: &ProducerMessage) -> Result<Bytes, Error> {
    match &message.key {
        Some(key) => key.encode(),
        None => Ok(Bytes::new()),
    }
}

/// A single override of the hash partitioner defaults.
pub enum HashPartitionerOption {
    Hasher(HasherFactory),
    Fallback(Arc<dyn Partitioner>),
    KeyBytes(KeyBytesExtractor),
    SignHandling(SignHandling),
}

/// The configuration of the hash partitioner. Each field has its own default
/// and can be overridden independently of the others.
#[derive(Clone)]
pub struct HashPartitionerOptions {
    pub hasher: HasherFactory,
    /// Used for the messages without key, a random partitioner is used when not set.
    pub fallback: Option<Arc<dyn Partitioner>>,
    pub key_bytes: KeyBytesExtractor,
    pub sign_handling: SignHandling,
}

impl Default for HashPartitionerOptions {
    fn default() -> Self {
        Self {
            hasher: default_hasher(),
            fallback: None,
            key_bytes: Arc::new(encode_key),
            sign_handling: SignHandling::default(),
        }
    }
}

impl Debug for HashPartitionerOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashPartitionerOptions")
            .field("fallback", &self.fallback)
            .field("sign_handling", &self.sign_handling)
            .finish_non_exhaustive()
    }
}

impl HashPartitionerOptions {
    /// Applies the overrides in order onto the defaults, the last one wins.
    pub fn from_overrides(overrides: impl IntoIterator<Item = HashPartitionerOption>) -> Self {
        overrides
            .into_iter()
            .fold(Self::default(), |options, option| options.apply(option))
    }

    pub fn apply(mut self, option: HashPartitionerOption) -> Self {
        match option {
            HashPartitionerOption::Hasher(hasher) => self.hasher = hasher,
            HashPartitionerOption::Fallback(fallback) => self.fallback = Some(fallback),
            HashPartitionerOption::KeyBytes(key_bytes) => self.key_bytes = key_bytes,
            HashPartitionerOption::SignHandling(sign_handling) => {
                self.sign_handling = sign_handling
            }
        }
        self
    }

    pub fn with_hasher(self, hasher: HasherFactory) -> Self {
        self.apply(HashPartitionerOption::Hasher(hasher))
    }

    pub fn with_fallback(self, fallback: Arc<dyn Partitioner>) -> Self {
        self.apply(HashPartitionerOption::Fallback(fallback))
    }

    pub fn with_key_bytes(
        self,
        key_bytes: impl Fn(&ProducerMessage) -> Result<Bytes, Error> + Send + Sync + 'static,
    ) -> Self {
        self.apply(HashPartitionerOption::KeyBytes(Arc::new(key_bytes)))
    }

    pub fn with_sign_handling(self, sign_handling: SignHandling) -> Self {
        self.apply(HashPartitionerOption::SignHandling(sign_handling))
    }
}

/// Chooses the partition by hashing the message key, so the messages with the same key
/// always land on the same partition. The messages without key are passed to the fallback.
pub struct HashPartitioner {
    topic: String,
    hasher: HasherFactory,
    fallback: Arc<dyn Partitioner>,
    key_bytes: KeyBytesExtractor,
    sign_handling: SignHandling,
}

impl HashPartitioner {
    pub fn new(topic: &str) -> Self {
        Self::custom(topic, HashPartitionerOptions::default())
    }

    pub fn with_hasher(topic: &str, hasher: HasherFactory) -> Self {
        Self::custom(topic, HashPartitionerOptions::default().with_hasher(hasher))
    }

    /// Hashes with FNV-1a and clears the sign bit, compatible with the reference Java client.
    pub fn reference(topic: &str) -> Self {
        Self::custom(
            topic,
            HashPartitionerOptions::default().with_sign_handling(SignHandling::MaskSignBit),
        )
    }

    /// Hashes with CRC32 and treats the sum as unsigned.
    pub fn consistent_crc(topic: &str) -> Self {
        Self::custom(
            topic,
            HashPartitionerOptions::default()
                .with_hasher(HashAlgorithm::Crc32.factory())
                .with_sign_handling(SignHandling::Unsigned),
        )
    }

    /// Hashes with murmur2 the same way as the Java client's default partitioner.
    pub fn murmur2(topic: &str) -> Self {
        Self::custom(
            topic,
            HashPartitionerOptions::default()
                .with_hasher(HashAlgorithm::Murmur2.factory())
                .with_sign_handling(SignHandling::MaskSignBit),
        )
    }

    pub fn custom(topic: &str, options: HashPartitionerOptions) -> Self {
        let fallback = options
            .fallback
            .unwrap_or_else(|| Arc::new(RandomPartitioner::new(topic)));
        Self {
            topic: topic.to_string(),
            hasher: options.hasher,
            fallback,
            key_bytes: options.key_bytes,
            sign_handling: options.sign_handling,
        }
    }
}

impl Debug for HashPartitioner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashPartitioner")
            .field("topic", &self.topic)
            .field("fallback", &self.fallback)
            .field("sign_handling", &self.sign_handling)
            .finish_non_exhaustive()
    }
}

impl Partitioner for HashPartitioner {
    fn partition(&self, message: &ProducerMessage, partitions_count: i32) -> Result<i32, Error> {
        validate_partitions_count(partitions_count)?;
        if !message.has_key() {
            return self.fallback.partition(message, partitions_count);
        }

        let key_bytes = (self.key_bytes)(message)?;
        let mut hasher = (self.hasher)();
        hasher.write(&key_bytes);
        let hash = hasher.sum32();
        let partition = self.sign_handling.to_partition(hash, partitions_count)?;
        trace!(
            "Calculated partition: {} for topic: {}, key hash: {}",
            partition,
            self.topic,
            hash
        );
        Ok(partition)
    }

    fn topic(&self) -> &str {
        &self.topic
    }

    fn requires_consistency(&self) -> bool {
        true
    }

    fn message_requires_consistency(&self, message: &ProducerMessage) -> bool {
        message.has_key()
    }
}
