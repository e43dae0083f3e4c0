use crate::factory::PartitionerKind;
use crate::hashing::HashAlgorithm;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartitionerConfig {
    pub default_partitioner: PartitionerKind,
    pub hash_algorithm: HashAlgorithm,
    /// Used by the hash based partitioners for the messages without key.
    pub fallback: PartitionerKind,
    pub topics: BTreeMap<String, PartitionerKind>,
}
