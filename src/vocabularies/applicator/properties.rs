use crate::{
    compilation::{Compiler, Validator},
    error::{CompileError, ValidationError},
    validator::{fall_back_key, validate_plan, Scope},
    vocabularies::{Keyword, KeywordId, Plan},
};
use ahash::AHashMap;
use serde_json::Value;

#[derive(Debug)]
pub(crate) struct Properties {
    properties: AHashMap<String, Plan>,
    /// Next link of the object fallback chain; consulted for keys that are
    /// not present in the map.
    pub(crate) alternate: Option<KeywordId>,
}

impl Properties {
    pub(crate) fn compile(
        compiler: &mut Compiler,
        schema: &Value,
        depth: usize,
    ) -> Result<Keyword, CompileError> {
        if let Value::Object(map) = schema {
            let mut properties = AHashMap::with_capacity(map.len());
            for (key, subschema) in map {
                let plan = compiler.compile_subschema(subschema, "properties", depth)?;
                properties.insert(key.clone(), plan);
            }
            Ok(Keyword::Properties(Properties {
                properties,
                alternate: None,
            }))
        } else {
            Err(CompileError::invalid_value("properties"))
        }
    }

    pub(crate) fn validate<'i>(
        &self,
        schema: &Validator,
        instance: &'i Value,
        scope: Scope,
        depth: usize,
    ) -> Result<(), ValidationError<'i>> {
        if let Value::Object(item) = instance {
            for (key, value) in item {
                if let Some(plan) = self.properties.get(key) {
                    validate_plan(schema, plan, value, Scope::default(), depth)?;
                } else {
                    fall_back_key(schema, self.alternate, scope, key, value, depth)?;
                }
            }
        }
        Ok(())
    }
}
