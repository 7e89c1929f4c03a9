use crate::{
    compilation::{Compiler, Validator},
    error::{CompileError, ValidationError},
    validator::{fall_back_item, validate_plan, Scope},
    vocabularies::{Keyword, KeywordId, Plan},
};
use serde_json::Value;

#[derive(Debug)]
pub(crate) struct PrefixItems {
    plans: Vec<Plan>,
    /// Next link of the array fallback chain; owns the positions past the
    /// prefix.
    pub(crate) alternate: Option<KeywordId>,
}

impl PrefixItems {
    pub(crate) fn compile(
        compiler: &mut Compiler,
        schema: &Value,
        depth: usize,
    ) -> Result<Keyword, CompileError> {
        if let Value::Array(items) = schema {
            let mut plans = Vec::with_capacity(items.len());
            for item in items {
                plans.push(compiler.compile_subschema(item, "prefixItems", depth)?);
            }
            Ok(Keyword::PrefixItems(PrefixItems {
                plans,
                alternate: None,
            }))
        } else {
            Err(CompileError::invalid_value("prefixItems"))
        }
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
                if let Some(plan) = self.plans.get(index) {
                    validate_plan(schema, plan, item, Scope::default(), depth)?;
                } else {
                    fall_back_item(schema, self.alternate, scope, index, item, depth)?;
                }
            }
        }
        Ok(())
    }
}
