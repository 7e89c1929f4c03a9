use crate::{
    error::{CompileError, ValidationError},
    vocabularies::{validation::helpers, Keyword},
};
use serde_json::{Number, Value};

#[derive(Debug)]
pub(crate) struct Minimum {
    limit: Number,
}

impl Minimum {
    pub(crate) fn compile(schema: &Value) -> Result<Keyword, CompileError> {
        if let Value::Number(limit) = schema {
            Ok(Keyword::Minimum(Minimum {
                limit: limit.clone(),
            }))
        } else {
            Err(CompileError::invalid_value("minimum"))
        }
    }

    pub(crate) fn validate<'i>(&self, instance: &'i Value) -> Result<(), ValidationError<'i>> {
        if let Value::Number(item) = instance {
            if helpers::num_lt(item, &self.limit) {
                return Err(ValidationError::minimum(instance, &self.limit));
            }
        }
        Ok(())
    }
}
