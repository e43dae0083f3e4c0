pub mod configs;
pub mod encoder;
pub mod error;
pub mod factory;
pub mod hashing;
pub mod message;
pub mod partitioners;
pub mod validatable;
