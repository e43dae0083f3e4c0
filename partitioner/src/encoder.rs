use crate::error::Error;
use bytes::Bytes;
use std::fmt::Debug;

/// The trait represents a message key or value which can be turned into bytes.
/// Encoding might fail, in which case the error is returned to the caller as is.
pub trait Encoder: Send + Sync + Debug {
    /// Encodes the value to bytes.
    fn encode(&self) -> Result<Bytes, Error>;

    /// Returns the length of the encoded value.
    fn length(&self) -> usize;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringEncoder(String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteEncoder(Bytes);

impl StringEncoder {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl ByteEncoder {
    pub fn new(value: impl Into<Bytes>) -> Self {
        Self(value.into())
    }
}

impl Encoder for StringEncoder {
    fn encode(&self) -> Result<Bytes, Error> {
        Ok(Bytes::copy_from_slice(self.0.as_bytes()))
    }

    fn length(&self) -> usize {
        self.0.len()
    }
}

impl Encoder for ByteEncoder {
    fn encode(&self) -> Result<Bytes, Error> {
        Ok(self.0.clone())
    }

    fn length(&self) -> usize {
        self.0.len()
    }
}

impl From<&str> for StringEncoder {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for StringEncoder {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<Vec<u8>> for ByteEncoder {
    fn from(value: Vec<u8>) -> Self {
        Self::new(value)
    }
}
