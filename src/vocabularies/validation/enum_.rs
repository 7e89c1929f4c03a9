use crate::{
    error::{CompileError, ValidationError},
    primitive_type::{PrimitiveType, PrimitiveTypesBitMap},
    vocabularies::{validation::helpers, Keyword},
};
use serde_json::Value;

#[derive(Debug)]
pub(crate) struct Enum {
    options: Value,
    // Types that occur among the options; lets us skip the scan entirely
    // when the instance type cannot possibly be there.
    types: PrimitiveTypesBitMap,
    items: Vec<Value>,
}

impl Enum {
    pub(crate) fn compile(schema: &Value) -> Result<Keyword, CompileError> {
        if let Value::Array(items) = schema {
            let mut types = PrimitiveTypesBitMap::new();
            for item in items {
                types |= PrimitiveType::from(item);
            }
            Ok(Keyword::Enum(Enum {
                options: schema.clone(),
                types,
                items: items.clone(),
            }))
        } else {
            Err(CompileError::invalid_value("enum"))
        }
    }

    pub(crate) fn validate<'i>(&self, instance: &'i Value) -> Result<(), ValidationError<'i>> {
        if self.types.contains_type(PrimitiveType::from(instance))
            && self.items.iter().any(|item| helpers::equal(instance, item))
        {
            Ok(())
        } else {
            Err(ValidationError::enumeration(instance, &self.options))
        }
    }
}
