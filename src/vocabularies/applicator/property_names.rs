use crate::{
    compilation::{Compiler, Validator},
    error::{CompileError, ValidationError},
    validator::{validate_plan, Scope},
    vocabularies::{Keyword, Plan},
};
use serde_json::Value;

#[derive(Debug)]
pub(crate) struct PropertyNames {
    plan: Plan,
}

impl PropertyNames {
    pub(crate) fn compile(
        compiler: &mut Compiler,
        schema: &Value,
        depth: usize,
    ) -> Result<Keyword, CompileError> {
        match schema {
            Value::Object(_) | Value::Bool(_) => Ok(Keyword::PropertyNames(PropertyNames {
                plan: compiler.compile_subschema(schema, "propertyNames", depth)?,
            })),
            _ => Err(CompileError::invalid_value("propertyNames")),
        }
    }

    pub(crate) fn validate<'i>(
        &self,
        schema: &Validator,
        instance: &'i Value,
        depth: usize,
    ) -> Result<(), ValidationError<'i>> {
        if let Value::Object(item) = instance {
            for key in item.keys() {
                // Each key is validated as a string instance of its own.
                let key_instance = Value::String(key.clone());
                if let Err(error) =
                    validate_plan(schema, &self.plan, &key_instance, Scope::default(), depth)
                {
                    return Err(error.into_owned());
                }
            }
        }
        Ok(())
    }
}
