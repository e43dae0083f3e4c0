use crate::configs::partitioner::PartitionerConfig;
use crate::error::Error;
use crate::validatable::Validatable;
use tracing::error;

impl Validatable<Error> for PartitionerConfig {
    fn validate(&self) -> Result<(), Error> {
        if self.fallback.is_hash_based() {
            error!(
                "Partitioner configuration -> fallback cannot be hash based, got: {}.",
                self.fallback
            );
            return Err(Error::InvalidConfiguration);
        }

        Ok(())
    }
}
