pub mod hash;
pub mod manual;
pub mod random;
pub mod round_robin;

use crate::error::Error;
use crate::message::ProducerMessage;
use std::fmt::Debug;

/// The trait represents the logic responsible for choosing the partition for a message
/// sent to the topic the partitioner was created for.
/// The partitions count is passed on every call, as it might change between calls.
pub trait Partitioner: Send + Sync + Debug {
    /// Returns the partition index in the range `[0, partitions_count)`.
    fn partition(&self, message: &ProducerMessage, partitions_count: i32) -> Result<i32, Error>;

    /// Returns the topic this partitioner was created for.
    fn topic(&self) -> &str;

    /// Whether every message must always land on the same partition, e.g. when retried.
    fn requires_consistency(&self) -> bool {
        false
    }

    /// Whether the partition chosen for this specific message must stay the same across retries.
    fn message_requires_consistency(&self, _message: &ProducerMessage) -> bool {
        self.requires_consistency()
    }
}

pub(crate) fn validate_partitions_count(partitions_count: i32) -> Result<(), Error> {
    if partitions_count <= 0 {
        return Err(Error::InvalidPartitionsCount(partitions_count));
    }

    Ok(())
}
