use crate::error::Error;
use crate::message::ProducerMessage;
use crate::partitioners::{validate_partitions_count, Partitioner};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::trace;

/// Cycles through the partitions in order, starting from 0.
/// The counter is never reset, also when the partitions count changes between calls.
#[derive(Debug)]
pub struct RoundRobinPartitioner {
    topic: String,
    counter: AtomicU64,
}

impl RoundRobinPartitioner {
    pub fn new(topic: &str) -> Self {
        Self {
            topic: topic.to_string(),
            counter: AtomicU64::new(0),
        }
    }
}

impl Partitioner for RoundRobinPartitioner {
    fn partition(&self, _message: &ProducerMessage, partitions_count: i32) -> Result<i32, Error> {
        validate_partitions_count(partitions_count)?;
        let counter = self.counter.fetch_add(1, Ordering::SeqCst);
        let partition = (counter % partitions_count as u64) as i32;
        trace!(
            "Next partition: {} for topic: {}, counter: {}",
            partition,
            self.topic,
            counter
        );
        Ok(partition)
    }

    fn topic(&self) -> &str {
        &self.topic
    }
}
