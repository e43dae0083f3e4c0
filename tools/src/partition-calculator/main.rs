mod calculator;

use anyhow::Result;
use clap::Parser;
use partitioner::configs::config_provider::{ConfigProvider, FileConfigProvider};
use partitioner::configs::partitioner::PartitionerConfig;
use partitioner::factory::ConfiguredPartitionerFactory;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct PartitionCalculatorArgs {
    /// Path to the TOML configuration, the defaults are used when not set.
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, default_value = "mytopic")]
    pub topic: String,

    #[arg(long, default_value_t = 1)]
    pub partitions: i32,

    /// Message keys, a single keyless message is used when none are provided.
    #[arg(long = "key")]
    pub keys: Vec<String>,

    #[arg(long, default_value_t = 0)]
    pub explicit_partition: i32,

    /// Prints the effective configuration before calculating the partitions.
    #[arg(long, default_value_t = false)]
    pub print_config: bool,
}

fn main() -> Result<()> {
    let args = PartitionCalculatorArgs::parse();

    Registry::default()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or(EnvFilter::new("INFO")))
        .init();

    let config = match &args.config {
        Some(path) => FileConfigProvider::new(path.clone()).load_config()?,
        None => PartitionerConfig::default(),
    };
    if args.print_config {
        println!("{}", toml::to_string_pretty(&config)?);
    }

    let factory = ConfiguredPartitionerFactory::new(config)?;
    info!(
        "Calculating partitions for topic: {} with {} partitions...",
        args.topic, args.partitions
    );
    let assignments = calculator::calculate(
        &factory,
        &args.topic,
        &args.keys,
        args.partitions,
        args.explicit_partition,
    )?;
    for assignment in assignments {
        println!("{assignment}");
    }
    Ok(())
}
