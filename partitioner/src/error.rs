use strum::IntoStaticStr;
use thiserror::Error;

#[derive(Debug, Error, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Error {
    #[error("Invalid partitions count: {0}, it must be greater than 0")]
    InvalidPartitionsCount(i32),
    #[error("Cannot encode key: {0}")]
    CannotEncodeKey(String),
    #[error("Invalid configuration")]
    InvalidConfiguration,
    #[error("Cannot load configuration: {0}")]
    CannotLoadConfiguration(String),
}

impl Error {
    pub fn as_code(&self) -> u32 {
        match self {
            Error::InvalidPartitionsCount(_) => 1,
            Error::CannotEncodeKey(_) => 2,
            Error::InvalidConfiguration => 3,
            Error::CannotLoadConfiguration(_) => 4,
        }
    }

    pub fn as_string(&self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_should_be_mapped_to_code_and_name() {
        let error = Error::InvalidPartitionsCount(0);
        assert_eq!(error.as_code(), 1);
        assert_eq!(error.as_string(), "invalid_partitions_count");

        let error = Error::CannotEncodeKey("boom".to_string());
        assert_eq!(error.as_code(), 2);
        assert_eq!(error.as_string(), "cannot_encode_key");
    }

    #[test]
    fn error_message_should_contain_the_details() {
        let error = Error::CannotLoadConfiguration("missing file".to_string());
        assert_eq!(
            error.to_string(),
            "Cannot load configuration: missing file"
        );
    }
}
