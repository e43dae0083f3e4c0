use crate::configs::partitioner::PartitionerConfig;
use std::fmt::{Display, Formatter};

impl Display for PartitionerConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let topics = self
            .topics
            .iter()
            .map(|(topic, kind)| format!("{topic}: {kind}"))
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "{{ default_partitioner: {}, hash_algorithm: {}, fallback: {}, topics: {{ {} }} }}",
            self.default_partitioner, self.hash_algorithm, self.fallback, topics
        )
    }
}
