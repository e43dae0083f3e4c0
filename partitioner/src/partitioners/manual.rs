use crate::error::Error;
use crate::message::ProducerMessage;
use crate::partitioners::{validate_partitions_count, Partitioner};
use tracing::debug;

/// Returns the partition set explicitly on the message. The value is passed through
/// as is, keeping it within the partitions range is up to the caller.
#[derive(Debug)]
pub struct ManualPartitioner {
    topic: String,
}

impl ManualPartitioner {
    pub fn new(topic: &str) -> Self {
        Self {
            topic: topic.to_string(),
        }
    }
}

impl Partitioner for ManualPartitioner {
    fn partition(&self, message: &ProducerMessage, partitions_count: i32) -> Result<i32, Error> {
        validate_partitions_count(partitions_count)?;
        if message.partition < 0 || message.partition >= partitions_count {
            debug!(
                "Explicit partition: {} for topic: {} is out of range, partitions: {}",
                message.partition, self.topic, partitions_count
            );
        }
        Ok(message.partition)
    }

    fn topic(&self) -> &str {
        &self.topic
    }

    fn requires_consistency(&self) -> bool {
        true
    }
}
