pub(crate) mod additional_items;
pub(crate) mod additional_properties;
pub(crate) mod all_of;
pub(crate) mod any_of;
pub(crate) mod contains;
pub(crate) mod if_;
pub(crate) mod items;
pub(crate) mod not;
pub(crate) mod one_of;
pub(crate) mod pattern_properties;
pub(crate) mod prefix_items;
pub(crate) mod properties;
pub(crate) mod property_names;
pub(crate) mod unevaluated_items;
pub(crate) mod unevaluated_properties;

use crate::{
    compilation::{Compiler, Validator},
    error::{CompileError, ValidationError},
    validator::{validate_plan, Scope},
    vocabularies::{KeywordId, Plan},
};
use serde_json::Value;

/// Shared payload of `additionalItems`, `additionalProperties`,
/// `unevaluatedItems` and `unevaluatedProperties`: a sub-schema or a bare
/// boolean. All four accept children the same way, they only differ in how
/// a rejection is reported.
#[derive(Debug)]
pub(crate) struct Subschema {
    pub(crate) plan: Plan,
    /// `false` when the schema forbids children outright (the keyword's
    /// value was the `false` schema).
    pub(crate) allowed: bool,
}

impl Subschema {
    pub(crate) fn compile(
        compiler: &mut Compiler,
        schema: &Value,
        keyword: &'static str,
        depth: usize,
    ) -> Result<Subschema, CompileError> {
        match schema {
            Value::Bool(allowed) => Ok(Subschema {
                plan: Plan::default(),
                allowed: *allowed,
            }),
            Value::Object(_) => Ok(Subschema {
                plan: compiler.compile_subschema(schema, keyword, depth)?,
                allowed: true,
            }),
            _ => Err(CompileError::invalid_value(keyword)),
        }
    }

    /// Apply the sub-schema to one child value. The caller has already
    /// handled the `allowed` gate.
    pub(crate) fn validate_child<'i>(
        &self,
        schema: &Validator,
        value: &'i Value,
        depth: usize,
    ) -> Result<(), ValidationError<'i>> {
        validate_plan(schema, &self.plan, value, Scope::default(), depth)
    }
}

/// Shared payload of the logical applicators (`allOf`, `anyOf`, `oneOf`,
/// `not`): an ordered list of child schema plans plus references to the
/// sibling `unevaluated*` keywords, which serve as the default fallback
/// for child chains that have none of their own.
#[derive(Debug)]
pub(crate) struct Logic {
    pub(crate) plans: Vec<Plan>,
    pub(crate) unevaluated_items: Option<KeywordId>,
    pub(crate) unevaluated_properties: Option<KeywordId>,
}

impl Logic {
    pub(crate) fn compile(
        compiler: &mut Compiler,
        schema: &Value,
        keyword: &'static str,
        depth: usize,
    ) -> Result<Logic, CompileError> {
        if let Value::Array(items) = schema {
            let mut plans = Vec::with_capacity(items.len());
            for item in items {
                plans.push(compiler.compile_subschema(item, keyword, depth)?);
            }
            Ok(Logic {
                plans,
                unevaluated_items: None,
                unevaluated_properties: None,
            })
        } else {
            Err(CompileError::invalid_value(keyword))
        }
    }

    /// Validate the instance against every child schema and count how many
    /// succeed. Fatal errors are never absorbed into the count.
    pub(crate) fn count_valid<'i>(
        &self,
        schema: &Validator,
        instance: &'i Value,
        depth: usize,
    ) -> Result<(usize, usize), ValidationError<'i>> {
        let scope = Scope {
            unevaluated_items: self.unevaluated_items,
            unevaluated_properties: self.unevaluated_properties,
        };
        let mut count = 0;
        for plan in &self.plans {
            match validate_plan(schema, plan, instance, scope, depth) {
                Ok(()) => count += 1,
                Err(error) if error.is_fatal() => return Err(error),
                Err(_) => {}
            }
        }
        Ok((count, self.plans.len()))
    }
}
