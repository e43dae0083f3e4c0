use crate::configs::partitioner::PartitionerConfig;
use crate::error::Error;
use crate::hashing::HashAlgorithm;
use crate::partitioners::hash::{HashPartitioner, HashPartitionerOptions, SignHandling};
use crate::partitioners::manual::ManualPartitioner;
use crate::partitioners::random::RandomPartitioner;
use crate::partitioners::round_robin::RoundRobinPartitioner;
use crate::partitioners::Partitioner;
use crate::validatable::Validatable;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};
use std::sync::Arc;
use strum::{Display, EnumString};
use tracing::{debug, info};

/// Creates the partitioner for the given topic. It's invoked once per topic,
/// and the returned instance is then used for all the messages sent to that topic.
pub trait PartitionerFactory: Send + Sync {
    fn create(&self, topic: &str) -> Arc<dyn Partitioner>;
}

impl<F> PartitionerFactory for F
where
    F: Fn(&str) -> Arc<dyn Partitioner> + Send + Sync,
{
    fn create(&self, topic: &str) -> Arc<dyn Partitioner> {
        self(topic)
    }
}

#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PartitionerKind {
    Random,
    RoundRobin,
    #[default]
    Hash,
    ReferenceHash,
    ConsistentCrc,
    #[serde(rename = "murmur2")]
    #[strum(serialize = "murmur2")]
    Murmur2,
    Manual,
}

impl PartitionerKind {
    pub fn is_hash_based(&self) -> bool {
        matches!(
            self,
            PartitionerKind::Hash
                | PartitionerKind::ReferenceHash
                | PartitionerKind::ConsistentCrc
                | PartitionerKind::Murmur2
        )
    }

    /// Returns the options of the hash based partitioners, the algorithm is used
    /// by the kinds which don't enforce their own one.
    pub fn hash_options(&self, algorithm: HashAlgorithm) -> Option<HashPartitionerOptions> {
        let options = HashPartitionerOptions::default();
        match self {
            PartitionerKind::Hash => Some(options.with_hasher(algorithm.factory())),
            PartitionerKind::ReferenceHash => Some(
                options
                    .with_hasher(algorithm.factory())
                    .with_sign_handling(SignHandling::MaskSignBit),
            ),
            PartitionerKind::ConsistentCrc => Some(
                options
                    .with_hasher(HashAlgorithm::Crc32.factory())
                    .with_sign_handling(SignHandling::Unsigned),
            ),
            PartitionerKind::Murmur2 => Some(
                options
                    .with_hasher(HashAlgorithm::Murmur2.factory())
                    .with_sign_handling(SignHandling::MaskSignBit),
            ),
            PartitionerKind::Random | PartitionerKind::RoundRobin | PartitionerKind::Manual => {
                None
            }
        }
    }
}

impl PartitionerFactory for PartitionerKind {
    fn create(&self, topic: &str) -> Arc<dyn Partitioner> {
        match self {
            PartitionerKind::Random => Arc::new(RandomPartitioner::new(topic)),
            PartitionerKind::RoundRobin => Arc::new(RoundRobinPartitioner::new(topic)),
            PartitionerKind::Hash => Arc::new(HashPartitioner::new(topic)),
            PartitionerKind::ReferenceHash => Arc::new(HashPartitioner::reference(topic)),
            PartitionerKind::ConsistentCrc => Arc::new(HashPartitioner::consistent_crc(topic)),
            PartitionerKind::Murmur2 => Arc::new(HashPartitioner::murmur2(topic)),
            PartitionerKind::Manual => Arc::new(ManualPartitioner::new(topic)),
        }
    }
}

/// Creates the hash partitioners sharing the same options.
/// When the fallback factory is set, each topic gets its own fallback instance,
/// otherwise the fallback from the options (if any) is shared by all the topics.
pub struct HashPartitionerFactory {
    options: HashPartitionerOptions,
    fallback: Option<Arc<dyn PartitionerFactory>>,
}

impl HashPartitionerFactory {
    pub fn new(options: HashPartitionerOptions) -> Self {
        Self {
            options,
            fallback: None,
        }
    }

    pub fn with_fallback_factory(mut self, fallback: Arc<dyn PartitionerFactory>) -> Self {
        self.fallback = Some(fallback);
        self
    }
}

impl Debug for HashPartitionerFactory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashPartitionerFactory")
            .field("options", &self.options)
            .field("fallback_factory", &self.fallback.is_some())
            .finish()
    }
}

impl PartitionerFactory for HashPartitionerFactory {
    fn create(&self, topic: &str) -> Arc<dyn Partitioner> {
        let mut options = self.options.clone();
        if let Some(fallback) = &self.fallback {
            options.fallback = Some(fallback.create(topic));
        }
        Arc::new(HashPartitioner::custom(topic, options))
    }
}

/// Selects the partitioner per topic based on the configuration.
#[derive(Debug)]
pub struct ConfiguredPartitionerFactory {
    config: PartitionerConfig,
}

impl ConfiguredPartitionerFactory {
    pub fn new(config: PartitionerConfig) -> Result<Self, Error> {
        config.validate()?;
        info!("Partitioner factory created with config: {}", config);
        Ok(Self { config })
    }

    pub fn kind(&self, topic: &str) -> PartitionerKind {
        self.config
            .topics
            .get(topic)
            .copied()
            .unwrap_or(self.config.default_partitioner)
    }
}

impl PartitionerFactory for ConfiguredPartitionerFactory {
    fn create(&self, topic: &str) -> Arc<dyn Partitioner> {
        let kind = self.kind(topic);
        debug!("Creating partitioner: {} for topic: {}", kind, topic);
        match kind.hash_options(self.config.hash_algorithm) {
            Some(options) => {
                let options = options.with_fallback(self.config.fallback.create(topic));
                Arc::new(HashPartitioner::custom(topic, options))
            }
            None => kind.create(topic),
        }
    }
}
