use partitioner::encoder::StringEncoder;
use partitioner::error::Error;
use partitioner::factory::PartitionerFactory;
use partitioner::message::ProducerMessage;
use std::fmt::{Display, Formatter};

#[derive(Debug, PartialEq, Eq)]
pub struct Assignment {
    pub key: Option<String>,
    pub partition: i32,
    pub requires_consistency: bool,
}

impl Display for Assignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -> {} (consistent: {})",
            self.key.as_deref().unwrap_or("<no key>"),
            self.partition,
            self.requires_consistency
        )
    }
}

pub fn calculate(
    factory: &dyn PartitionerFactory,
    topic: &str,
    keys: &[String],
    partitions_count: i32,
    explicit_partition: i32,
) -> Result<Vec<Assignment>, Error> {
    let partitioner = factory.create(topic);
    let messages = if keys.is_empty() {
        vec![(None, ProducerMessage::new(topic))]
    } else {
        keys.iter()
            .map(|key| {
                (
                    Some(key.clone()),
                    ProducerMessage::new(topic).with_key(StringEncoder::new(key.as_str())),
                )
            })
            .collect()
    };

    messages
        .into_iter()
        .map(|(key, message)| -> Result<Assignment, Error> {
            let message = message.with_partition(explicit_partition);
            Ok(Assignment {
                partition: partitioner.partition(&message, partitions_count)?,
                requires_consistency: partitioner.message_requires_consistency(&message),
                key,
            })
        })
        .collect()
}
