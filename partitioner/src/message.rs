use crate::encoder::Encoder;
use std::sync::Arc;

/// The message as seen by the partitioners. Only the key and the explicit partition
/// are ever inspected, the value stays opaque.
#[derive(Debug, Clone, Default)]
pub struct ProducerMessage {
    pub topic: String,
    pub key: Option<Arc<dyn Encoder>>,
    pub value: Option<Arc<dyn Encoder>>,
    /// Explicit partition, used only by the manual partitioner.
    pub partition: i32,
}

impl ProducerMessage {
    pub fn new(topic: &str) -> Self {
        Self {
            topic: topic.to_string(),
            ..Default::default()
        }
    }

    pub fn with_key(mut self, key: impl Encoder + 'static) -> Self {
        self.key = Some(Arc::new(key));
        self
    }

    pub fn with_value(mut self, value: impl Encoder + 'static) -> Self {
        self.value = Some(Arc::new(value));
        self
    }

    pub fn with_partition(mut self, partition: i32) -> Self {
        self.partition = partition;
        self
    }

    pub fn has_key(&self) -> bool {
        self.key.is_some()
    }
}
