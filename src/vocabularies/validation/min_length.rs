use crate::{
    error::{CompileError, ValidationError},
    vocabularies::{validation::helpers, Keyword},
};
use serde_json::Value;

#[derive(Debug)]
pub(crate) struct MinLength {
    limit: u64,
}

impl MinLength {
    pub(crate) fn compile(schema: &Value) -> Result<Keyword, CompileError> {
        let limit = helpers::non_negative_integer(schema, "minLength")?;
        Ok(Keyword::MinLength(MinLength { limit }))
    }

    pub(crate) fn validate<'i>(&self, instance: &'i Value) -> Result<(), ValidationError<'i>> {
        if let Value::String(item) = instance {
            if (bytecount::num_chars(item.as_bytes()) as u64) < self.limit {
                return Err(ValidationError::min_length(instance, self.limit));
            }
        }
        Ok(())
    }
}
