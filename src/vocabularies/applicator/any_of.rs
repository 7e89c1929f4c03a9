use crate::{
    compilation::{Compiler, Validator},
    error::{CompileError, ValidationError},
    vocabularies::{applicator::Logic, Keyword},
};
use serde_json::Value;

pub(crate) fn compile(
    compiler: &mut Compiler,
    schema: &Value,
    depth: usize,
) -> Result<Keyword, CompileError> {
    Ok(Keyword::AnyOf(Logic::compile(
        compiler, schema, "anyOf", depth,
    )?))
}

pub(crate) fn validate<'i>(
    logic: &Logic,
    schema: &Validator,
    instance: &'i Value,
    depth: usize,
) -> Result<(), ValidationError<'i>> {
    let (count, _) = logic.count_valid(schema, instance, depth)?;
    if count >= 1 {
        Ok(())
    } else {
        Err(ValidationError::any_of(instance))
    }
}
