//! The validation driver: linear traversal of evaluation plans with
//! first-failure semantics, and the fallback-chain resolution shared by
//! the object- and array-shape applicators.
use crate::{
    compilation::{Validator, RECURSION_LIMIT},
    error::ValidationError,
    vocabularies::KeywordId,
};
use serde_json::Value;

/// References to the `unevaluated*` keywords of an enclosing logical
/// applicator. They serve as the default alternate for chains that have
/// none of their own, one applicator level deep.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Scope {
    pub(crate) unevaluated_items: Option<KeywordId>,
    pub(crate) unevaluated_properties: Option<KeywordId>,
}

/// Validate one instance value against one evaluation plan. The first
/// keyword that fails aborts the traversal.
pub(crate) fn validate_plan<'i>(
    schema: &Validator,
    plan: &[KeywordId],
    instance: &'i Value,
    scope: Scope,
    depth: usize,
) -> Result<(), ValidationError<'i>> {
    if depth >= RECURSION_LIMIT {
        return Err(ValidationError::recursion_limit(instance));
    }
    for &id in plan {
        schema.keywords[id].validate(schema, instance, scope, depth + 1)?;
    }
    Ok(())
}

/// Hand an object member that no earlier chain keyword owned to the next
/// link. With no link and no scope fallback the member is accepted.
pub(crate) fn fall_back_key<'i>(
    schema: &Validator,
    alternate: Option<KeywordId>,
    scope: Scope,
    key: &str,
    value: &'i Value,
    depth: usize,
) -> Result<(), ValidationError<'i>> {
    match alternate.or(scope.unevaluated_properties) {
        Some(id) => schema.keywords[id].validate_key(schema, key, value, scope, depth),
        None => Ok(()),
    }
}

/// Hand an array element that no earlier chain keyword owned to the next
/// link. With no link and no scope fallback the element is accepted.
pub(crate) fn fall_back_item<'i>(
    schema: &Validator,
    alternate: Option<KeywordId>,
    scope: Scope,
    index: usize,
    item: &'i Value,
    depth: usize,
) -> Result<(), ValidationError<'i>> {
    match alternate.or(scope.unevaluated_items) {
        Some(id) => schema.keywords[id].validate_item(schema, index, item, scope, depth),
        None => Ok(()),
    }
}
