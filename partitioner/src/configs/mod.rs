pub mod config_provider;
pub mod defaults;
pub mod displays;
pub mod partitioner;
pub mod validators;
