mod common;

use bytes::Bytes;
use common::{assert_partitioning_consistent, random_bytes_message, random_string, TOPIC};
use partitioner::encoder::StringEncoder;
use partitioner::error::Error;
use partitioner::factory::{HashPartitionerFactory, PartitionerFactory, PartitionerKind};
use partitioner::hashing::HashAlgorithm;
use partitioner::message::ProducerMessage;
use partitioner::partitioners::hash::{
    HashPartitioner, HashPartitionerOption, HashPartitionerOptions,
};
use partitioner::partitioners::manual::ManualPartitioner;
use partitioner::partitioners::random::RandomPartitioner;
use partitioner::partitioners::round_robin::RoundRobinPartitioner;
use partitioner::partitioners::Partitioner;
use std::sync::Arc;

const MIN_HASH_KEY: &str = "1468509572224";

fn keyless() -> ProducerMessage {
    ProducerMessage::new(TOPIC)
}

fn keyed(key: &str) -> ProducerMessage {
    ProducerMessage::new(TOPIC).with_key(StringEncoder::new(key))
}

#[test]
fn random_partitioner_should_stay_in_range() {
    let partitioner = RandomPartitioner::new(TOPIC);
    assert_eq!(partitioner.partition(&keyless(), 1).unwrap(), 0);
    for _ in 1..50 {
        let choice = partitioner.partition(&keyless(), 50).unwrap();
        assert!((0..50).contains(&choice));
    }
}

#[test]
fn round_robin_partitioner_should_cycle_through_partitions() {
    let partitioner = RoundRobinPartitioner::new(TOPIC);
    assert_eq!(partitioner.partition(&keyless(), 1).unwrap(), 0);
    for i in 1..50 {
        assert_eq!(partitioner.partition(&keyless(), 7).unwrap(), i % 7);
    }
}

#[test]
fn hash_partitioner_with_hasher_should_be_consistent() {
    let partitioner = HashPartitioner::with_hasher(TOPIC, HashAlgorithm::Fnv1a.factory());
    assert_eq!(partitioner.partition(&keyless(), 1).unwrap(), 0);
    for _ in 1..50 {
        let choice = partitioner.partition(&keyless(), 50).unwrap();
        assert!((0..50).contains(&choice));
    }
    for _ in 1..50 {
        assert_partitioning_consistent(&partitioner, &random_bytes_message(), 50);
    }
}

#[test]
fn hash_partitioner_should_be_consistent() {
    let partitioner = HashPartitioner::new(TOPIC);
    assert_eq!(partitioner.partition(&keyless(), 1).unwrap(), 0);
    for _ in 1..50 {
        let choice = partitioner.partition(&keyless(), 50).unwrap();
        assert!((0..50).contains(&choice));
    }
    for _ in 1..50 {
        assert_partitioning_consistent(&partitioner, &random_bytes_message(), 50);
    }
}

#[test]
fn hash_partitioner_should_handle_minimum_signed_hash() {
    for partitioner in [
        HashPartitioner::new(TOPIC),
        HashPartitioner::with_hasher(TOPIC, HashAlgorithm::Fnv1a.factory()),
        HashPartitioner::reference(TOPIC),
    ] {
        let choice = partitioner.partition(&keyed(MIN_HASH_KEY), 50).unwrap();
        assert!((0..50).contains(&choice));
    }
}

#[test]
fn hash_partitioner_should_require_consistency_only_for_keyed_messages() {
    let partitioner: Arc<dyn Partitioner> = PartitionerKind::Hash.create(TOPIC);
    assert!(partitioner.message_requires_consistency(&keyed("hi")));
    assert!(!partitioner.message_requires_consistency(&keyless()));
}

#[test]
fn strategies_without_per_message_consistency_should_default_to_static_answer() {
    assert!(!RandomPartitioner::new(TOPIC).message_requires_consistency(&keyed("hi")));
    assert!(!RoundRobinPartitioner::new(TOPIC).message_requires_consistency(&keyed("hi")));
    assert!(ManualPartitioner::new(TOPIC).message_requires_consistency(&keyless()));
}

#[test]
fn manual_partitioner_should_return_explicit_partition() {
    let partitioner = ManualPartitioner::new(TOPIC);
    assert_eq!(partitioner.partition(&keyless(), 1).unwrap(), 0);
    for i in 1..50 {
        let message = keyless().with_partition(i);
        assert_eq!(partitioner.partition(&message, 50).unwrap(), i);
    }
}

#[test]
fn custom_fallback_partitioner_should_be_used_for_keyless_messages() {
    let partitioner = HashPartitioner::custom(
        TOPIC,
        HashPartitionerOptions::from_overrides([HashPartitionerOption::Fallback(Arc::new(
            RoundRobinPartitioner::new(TOPIC),
        ))]),
    );

    for i in 0..50 {
        assert_eq!(partitioner.partition(&keyless(), 7).unwrap(), i % 7);
    }
    for _ in 0..50 {
        assert_partitioning_consistent(&partitioner, &random_bytes_message(), 50);
    }

    assert!(!partitioner.message_requires_consistency(&keyless()));
    assert!(partitioner.message_requires_consistency(&keyed("hi")));
    assert!(partitioner.message_requires_consistency(&random_bytes_message()));
}

const KEY_SEPARATOR: &[u8] = b"::";

fn key_prefix(message: &ProducerMessage) -> Result<Bytes, Error> {
    let key = match &message.key {
        Some(key) => key.encode()?,
        None => return Ok(Bytes::new()),
    };
    let prefix_length = key
        .windows(KEY_SEPARATOR.len())
        .position(|window| window == KEY_SEPARATOR)
        .unwrap_or(key.len());
    Ok(key.slice(..prefix_length))
}

#[test]
fn custom_key_bytes_should_be_used_for_hashing() {
    let partitioner = HashPartitioner::custom(
        TOPIC,
        HashPartitionerOptions::default().with_key_bytes(key_prefix),
    );

    let expected = partitioner
        .partition(&keyed(&format!("PRE::{}", random_string(20))), 50)
        .unwrap();
    for _ in 1..250 {
        let key = format!("PRE::{}", random_string(20));
        assert_eq!(partitioner.partition(&keyed(&key), 50).unwrap(), expected);
    }
}

#[test]
fn key_prefix_should_end_at_double_colon_separator() {
    assert_eq!(
        key_prefix(&keyed("PRE:x::suffix")).unwrap(),
        Bytes::from_static(b"PRE:x")
    );
    assert_eq!(
        key_prefix(&keyed("no-separator")).unwrap(),
        Bytes::from_static(b"no-separator")
    );

    let partitioner = HashPartitioner::custom(
        TOPIC,
        HashPartitionerOptions::default().with_key_bytes(key_prefix),
    );
    let plain = HashPartitioner::new(TOPIC);
    for _ in 0..50 {
        let key = format!("PRE:x::{}", random_string(20));
        assert_eq!(
            partitioner.partition(&keyed(&key), 50).unwrap(),
            plain.partition(&keyed("PRE:x"), 50).unwrap()
        );
    }
}

#[test]
fn every_strategy_should_stay_in_range() {
    let message = keyed("user-42");
    for kind in [
        PartitionerKind::Random,
        PartitionerKind::RoundRobin,
        PartitionerKind::Hash,
        PartitionerKind::ReferenceHash,
        PartitionerKind::ConsistentCrc,
        PartitionerKind::Murmur2,
        PartitionerKind::Manual,
    ] {
        let partitioner = kind.create(TOPIC);
        for partitions_count in 1..20 {
            let choice = partitioner.partition(&message, partitions_count).unwrap();
            assert!(
                (0..partitions_count).contains(&choice),
                "{kind} returned {choice} for {partitions_count} partitions"
            );
        }
    }
}

#[test]
fn every_strategy_should_reject_non_positive_partitions_count() {
    for kind in [
        PartitionerKind::Random,
        PartitionerKind::RoundRobin,
        PartitionerKind::Hash,
        PartitionerKind::Manual,
    ] {
        let partitioner = kind.create(TOPIC);
        for partitions_count in [0, -1] {
            let error = partitioner
                .partition(&keyed("key"), partitions_count)
                .unwrap_err();
            assert!(matches!(error, Error::InvalidPartitionsCount(_)));
            assert_eq!(error.as_code(), 1);
        }
    }
}

#[test]
fn hash_partitioner_factory_should_share_options_between_topics() {
    let factory = HashPartitionerFactory::new(
        HashPartitionerOptions::default().with_hasher(HashAlgorithm::Xxhash32.factory()),
    );
    let first = factory.create("first");
    let second = factory.create("second");
    for i in 0..100 {
        let key = format!("key-{i}");
        assert_eq!(
            first.partition(&keyed(&key), 16).unwrap(),
            second.partition(&keyed(&key), 16).unwrap()
        );
    }
}
