use crate::configs::partitioner::PartitionerConfig;
use crate::factory::PartitionerKind;
use crate::hashing::HashAlgorithm;
use std::collections::BTreeMap;

impl Default for PartitionerConfig {
    fn default() -> PartitionerConfig {
        PartitionerConfig {
            default_partitioner: PartitionerKind::Hash,
            hash_algorithm: HashAlgorithm::Fnv1a,
            fallback: PartitionerKind::Random,
            topics: BTreeMap::new(),
        }
    }
}
