use crate::{
    compilation::{Compiler, Validator},
    error::{CompileError, ValidationError},
    validator::{fall_back_item, validate_plan, Scope},
    vocabularies::{Keyword, KeywordId, Plan},
};
use serde_json::Value;

/// `items` has three accepted shapes: a sub-schema applied to every
/// element, a legacy positional list (equivalent to `prefixItems`), and a
/// bare boolean.
#[derive(Debug)]
pub(crate) enum Shape {
    Schema(Plan),
    Positional(Vec<Plan>),
    Allowed(bool),
}

#[derive(Debug)]
pub(crate) struct Items {
    shape: Shape,
    /// Next link of the array fallback chain; consulted for positions past
    /// a positional list.
    pub(crate) alternate: Option<KeywordId>,
}

impl Items {
    pub(crate) fn compile(
        compiler: &mut Compiler,
        schema: &Value,
        depth: usize,
    ) -> Result<Keyword, CompileError> {
        let shape = match schema {
            Value::Object(_) => Shape::Schema(compiler.compile_subschema(schema, "items", depth)?),
            Value::Array(items) => {
                let mut plans = Vec::with_capacity(items.len());
                for item in items {
                    plans.push(compiler.compile_subschema(item, "items", depth)?);
                }
                Shape::Positional(plans)
            }
            Value::Bool(allowed) => Shape::Allowed(*allowed),
            _ => return Err(CompileError::invalid_value("items")),
        };
        Ok(Keyword::Items(Items {
            shape,
            alternate: None,
        }))
    }

    pub(crate) fn validate<'i>(
        &self,
        schema: &Validator,
        instance: &'i Value,
        scope: Scope,
        depth: usize,
    ) -> Result<(), ValidationError<'i>> {
        if let Value::Array(items) = instance {
            for (index, item) in items.iter().enumerate() {
                self.validate_item(schema, index, item, scope, depth)?;
            }
        }
        Ok(())
    }

    /// Validate one element. `index` is the element's absolute position in
    /// the instance array, which matters for the positional shape when
    /// this keyword serves as the fallback of `prefixItems`.
    pub(crate) fn validate_item<'i>(
        &self,
        schema: &Validator,
        index: usize,
        item: &'i Value,
        scope: Scope,
        depth: usize,
    ) -> Result<(), ValidationError<'i>> {
        match &self.shape {
            Shape::Schema(plan) => validate_plan(schema, plan, item, Scope::default(), depth),
            Shape::Positional(plans) => {
                if let Some(plan) = plans.get(index) {
                    validate_plan(schema, plan, item, Scope::default(), depth)
                } else {
                    fall_back_item(schema, self.alternate, scope, index, item, depth)
                }
            }
            Shape::Allowed(true) => Ok(()),
            Shape::Allowed(false) => Err(ValidationError::false_schema(item)),
        }
    }
}
