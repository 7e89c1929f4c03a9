use crate::{
    error::{CompileError, ValidationError},
    vocabularies::{validation::helpers, Keyword},
};
use serde_json::{Number, Value};

#[derive(Debug)]
pub(crate) struct ExclusiveMinimum {
    limit: Number,
}

impl ExclusiveMinimum {
    pub(crate) fn compile(schema: &Value) -> Result<Keyword, CompileError> {
        if let Value::Number(limit) = schema {
            Ok(Keyword::ExclusiveMinimum(ExclusiveMinimum {
                limit: limit.clone(),
            }))
        } else {
            Err(CompileError::invalid_value("exclusiveMinimum"))
        }
    }

    pub(crate) fn validate<'i>(&self, instance: &'i Value) -> Result<(), ValidationError<'i>> {
        if let Value::Number(item) = instance {
            if helpers::num_le(item, &self.limit) {
                return Err(ValidationError::exclusive_minimum(instance, &self.limit));
            }
        }
        Ok(())
    }
}
