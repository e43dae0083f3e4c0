use crate::error::Error;
use crate::message::ProducerMessage;
use crate::partitioners::{validate_partitions_count, Partitioner};
use rand::Rng;
use tracing::trace;

/// Chooses a random partition for every message, the message itself is ignored.
#[derive(Debug)]
pub struct RandomPartitioner {
    topic: String,
}

impl RandomPartitioner {
    pub fn new(topic: &str) -> Self {
        Self {
            topic: topic.to_string(),
        }
    }
}

impl Partitioner for RandomPartitioner {
    fn partition(&self, _message: &ProducerMessage, partitions_count: i32) -> Result<i32, Error> {
        validate_partitions_count(partitions_count)?;
        let partition = rand::thread_rng().gen_range(0..partitions_count);
        trace!(
            "Random partition: {} for topic: {}, partitions: {}",
            partition,
            self.topic,
            partitions_count
        );
        Ok(partition)
    }

    fn topic(&self) -> &str {
        &self.topic
    }
}
