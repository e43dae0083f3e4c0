use partitioner::encoder::ByteEncoder;
use partitioner::message::ProducerMessage;
use partitioner::partitioners::Partitioner;
use rand::distributions::{Alphanumeric, DistString};
use rand::RngCore;

pub const TOPIC: &str = "mytopic";

pub fn assert_partitioning_consistent(
    partitioner: &dyn Partitioner,
    message: &ProducerMessage,
    partitions_count: i32,
) {
    let choice = partitioner.partition(message, partitions_count).unwrap();
    assert!(
        (0..partitions_count).contains(&choice),
        "partition {choice} outside of range for {partitions_count} partitions"
    );
    for _ in 1..50 {
        let next_choice = partitioner.partition(message, partitions_count).unwrap();
        assert_eq!(next_choice, choice, "inconsistent partition for {message:?}");
    }
}

pub fn random_bytes_message() -> ProducerMessage {
    let mut buffer = vec![0u8; 256];
    rand::thread_rng().fill_bytes(&mut buffer);
    ProducerMessage::new(TOPIC).with_key(ByteEncoder::from(buffer))
}

pub fn random_string(length: usize) -> String {
    Alphanumeric.sample_string(&mut rand::thread_rng(), length)
}
