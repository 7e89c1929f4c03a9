use crate::{
    compilation::Validator,
    error::ValidationError,
    vocabularies::applicator::Subschema,
};
use serde_json::Value;

/// As the head of the array chain (the only array keyword present) the
/// sub-schema applies to every element: nothing else evaluated any of
/// them.
pub(crate) fn validate<'i>(
    subschema: &Subschema,
    schema: &Validator,
    instance: &'i Value,
    depth: usize,
) -> Result<(), ValidationError<'i>> {
    if let Value::Array(items) = instance {
        for (index, item) in items.iter().enumerate() {
            validate_item(subschema, schema, index, item, depth)?;
        }
    }
    Ok(())
}

/// As the terminal fallback of the array chain, or via an enclosing
/// logical applicator's scope.
pub(crate) fn validate_item<'i>(
    subschema: &Subschema,
    schema: &Validator,
    index: usize,
    item: &'i Value,
    depth: usize,
) -> Result<(), ValidationError<'i>> {
    if !subschema.allowed {
        return Err(ValidationError::unevaluated_items(item, index));
    }
    subschema.validate_child(schema, item, depth)
}
