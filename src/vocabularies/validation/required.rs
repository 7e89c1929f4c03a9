use crate::{
    error::{CompileError, ValidationError},
    vocabularies::Keyword,
};
use serde_json::Value;

#[derive(Debug)]
pub(crate) struct Required {
    required: Vec<String>,
}

impl Required {
    pub(crate) fn compile(schema: &Value) -> Result<Keyword, CompileError> {
        if let Value::Array(items) = schema {
            let mut required = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(string) => required.push(string.clone()),
                    _ => return Err(CompileError::invalid_value("required")),
                }
            }
            Ok(Keyword::Required(Required { required }))
        } else {
            Err(CompileError::invalid_value("required"))
        }
    }

    pub(crate) fn validate<'i>(&self, instance: &'i Value) -> Result<(), ValidationError<'i>> {
        if let Value::Object(item) = instance {
            for property in &self.required {
                if !item.contains_key(property) {
                    return Err(ValidationError::required(instance, property));
                }
            }
        }
        Ok(())
    }
}
