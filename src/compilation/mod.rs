//! Schema compilation.
//!
//! A schema document is compiled into a flat arena of keyword nodes plus
//! per-subschema evaluation plans (ordered lists of arena indices). The
//! arena owns every node; cross-references between nodes are plain indices
//! and never outlive the compiled schema.
pub(crate) mod wiring;

use crate::{
    error::{CompileError, ValidationError},
    validator::{validate_plan, Scope},
    vocabularies::{
        annotations,
        applicator::{
            all_of, any_of, contains::Contains, items::Items, not, one_of,
            pattern_properties::PatternProperties, prefix_items::PrefixItems,
            properties::Properties, property_names::PropertyNames, Subschema,
        },
        validation::{
            const_::Const, dependent_required::DependentRequired, enum_::Enum,
            exclusive_maximum::ExclusiveMaximum, exclusive_minimum::ExclusiveMinimum,
            format::Format, helpers, max_items::MaxItems, max_length::MaxLength,
            max_properties::MaxProperties, maximum::Maximum, min_items::MinItems,
            min_length::MinLength, min_properties::MinProperties, minimum::Minimum,
            multiple_of::MultipleOf, pattern::Pattern, required::Required, type_::Type,
            unique_items,
        },
        Keyword, KeywordId, Plan,
    },
};
use serde_json::{Map, Value};
use wiring::Siblings;

/// Recursion budget shared by compilation and validation. Each recursive
/// entry checks it; exceeding it is a dedicated error, not a crash.
pub(crate) const RECURSION_LIMIT: usize = 512;

/// A schema compiled into an evaluation plan.
///
/// The structure is immutable after compilation and a validation run is a
/// read-only traversal, so it can be freely shared between threads.
#[derive(Debug)]
pub struct Validator {
    pub(crate) keywords: Box<[Keyword]>,
    root: Plan,
}

impl Validator {
    /// Compile the input schema. The document must be a JSON object or a
    /// boolean.
    pub fn new(schema: &Value) -> Result<Validator, CompileError> {
        let mut compiler = Compiler::default();
        let root = compiler.compile_subschema(schema, "$root", 0)?;
        Ok(Validator {
            keywords: compiler.keywords.into_boxed_slice(),
            root,
        })
    }

    /// Parse and compile a schema document from its UTF-8 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Validator, CompileError> {
        let schema: Value = serde_json::from_slice(bytes)
            .map_err(|_| CompileError::invalid_value("$document"))?;
        Validator::new(&schema)
    }

    /// Run validation and return a boolean verdict.
    #[must_use]
    #[inline]
    pub fn is_valid(&self, instance: &Value) -> bool {
        self.validate(instance).is_ok()
    }

    /// Run validation and surface the first failing keyword on error.
    #[inline]
    pub fn validate<'i>(&self, instance: &'i Value) -> Result<(), ValidationError<'i>> {
        validate_plan(self, &self.root, instance, Scope::default(), 0)
    }
}

/// Accumulates the keyword arena during recursive descent.
#[derive(Debug, Default)]
pub(crate) struct Compiler {
    pub(crate) keywords: Vec<Keyword>,
}

impl Compiler {
    pub(crate) fn push(&mut self, keyword: Keyword) -> KeywordId {
        self.keywords.push(keyword);
        self.keywords.len() - 1
    }

    /// Compile one sub-schema into its evaluation plan. `keyword` names
    /// the owner for error reporting.
    pub(crate) fn compile_subschema(
        &mut self,
        schema: &Value,
        keyword: &str,
        depth: usize,
    ) -> Result<Plan, CompileError> {
        if depth >= RECURSION_LIMIT {
            return Err(CompileError::recursion_limit(keyword));
        }
        match schema {
            // `true` allows anything, `false` allows nothing.
            Value::Bool(true) => Ok(Plan::default()),
            Value::Bool(false) => {
                let id = self.push(Keyword::FalseSchema);
                Ok(vec![id].into_boxed_slice())
            }
            Value::Object(map) => self.compile_object(map, depth + 1),
            _ => Err(CompileError::invalid_value(keyword)),
        }
    }

    /// Compile every recognized key of a schema object, then run the
    /// dependency-wiring pass over the siblings to produce the plan.
    fn compile_object(
        &mut self,
        map: &Map<String, Value>,
        depth: usize,
    ) -> Result<Plan, CompileError> {
        let mut siblings = Siblings::default();
        for (key, value) in map {
            match key.as_str() {
                "type" => {
                    let id = self.push(Type::compile(value)?);
                    siblings.assertions.push(id);
                }
                "const" => {
                    let id = self.push(Const::compile(value));
                    siblings.assertions.push(id);
                }
                "enum" => {
                    let id = self.push(Enum::compile(value)?);
                    siblings.assertions.push(id);
                }
                "maximum" => {
                    let id = self.push(Maximum::compile(value)?);
                    siblings.assertions.push(id);
                }
                "minimum" => {
                    let id = self.push(Minimum::compile(value)?);
                    siblings.assertions.push(id);
                }
                "exclusiveMaximum" => {
                    let id = self.push(ExclusiveMaximum::compile(value)?);
                    siblings.assertions.push(id);
                }
                "exclusiveMinimum" => {
                    let id = self.push(ExclusiveMinimum::compile(value)?);
                    siblings.assertions.push(id);
                }
                "multipleOf" => {
                    let id = self.push(MultipleOf::compile(value)?);
                    siblings.assertions.push(id);
                }
                "maxLength" => {
                    let id = self.push(MaxLength::compile(value)?);
                    siblings.assertions.push(id);
                }
                "minLength" => {
                    let id = self.push(MinLength::compile(value)?);
                    siblings.assertions.push(id);
                }
                "pattern" => {
                    let id = self.push(Pattern::compile(value)?);
                    siblings.assertions.push(id);
                }
                "maxItems" => {
                    let id = self.push(MaxItems::compile(value)?);
                    siblings.assertions.push(id);
                }
                "minItems" => {
                    let id = self.push(MinItems::compile(value)?);
                    siblings.assertions.push(id);
                }
                "uniqueItems" => {
                    // `uniqueItems: false` asserts nothing and is skipped.
                    if let Some(keyword) = unique_items::compile(value)? {
                        let id = self.push(keyword);
                        siblings.assertions.push(id);
                    }
                }
                "required" => {
                    let id = self.push(Required::compile(value)?);
                    siblings.assertions.push(id);
                }
                "maxProperties" => {
                    let id = self.push(MaxProperties::compile(value)?);
                    siblings.assertions.push(id);
                }
                "minProperties" => {
                    let id = self.push(MinProperties::compile(value)?);
                    siblings.assertions.push(id);
                }
                "dependentRequired" => {
                    let id = self.push(DependentRequired::compile(value)?);
                    siblings.assertions.push(id);
                }
                "propertyNames" => {
                    let keyword = PropertyNames::compile(self, value, depth)?;
                    let id = self.push(keyword);
                    siblings.assertions.push(id);
                }
                "format" => {
                    let id = self.push(Format::compile(value)?);
                    siblings.assertions.push(id);
                }
                "title" => self.annotation(&mut siblings, "title", value)?,
                "description" => self.annotation(&mut siblings, "description", value)?,
                "$comment" => self.annotation(&mut siblings, "$comment", value)?,
                "$schema" => self.annotation(&mut siblings, "$schema", value)?,
                "deprecated" => self.annotation(&mut siblings, "deprecated", value)?,
                "readOnly" => self.annotation(&mut siblings, "readOnly", value)?,
                "writeOnly" => self.annotation(&mut siblings, "writeOnly", value)?,
                "examples" => self.annotation(&mut siblings, "examples", value)?,
                "example" => self.annotation(&mut siblings, "example", value)?,
                "default" => self.annotation(&mut siblings, "default", value)?,
                "allOf" => {
                    let keyword = all_of::compile(self, value, depth)?;
                    let id = self.push(keyword);
                    siblings.logic.push(id);
                }
                "anyOf" => {
                    let keyword = any_of::compile(self, value, depth)?;
                    let id = self.push(keyword);
                    siblings.logic.push(id);
                }
                "oneOf" => {
                    let keyword = one_of::compile(self, value, depth)?;
                    let id = self.push(keyword);
                    siblings.logic.push(id);
                }
                "not" => {
                    let keyword = not::compile(self, value, depth)?;
                    let id = self.push(keyword);
                    siblings.logic.push(id);
                }
                "contains" => {
                    let keyword = Contains::compile(self, value, depth)?;
                    siblings.contains = Some(self.push(keyword));
                }
                "minContains" => {
                    siblings.min_contains =
                        Some(helpers::non_negative_integer(value, "minContains")?);
                }
                "maxContains" => {
                    siblings.max_contains =
                        Some(helpers::non_negative_integer(value, "maxContains")?);
                }
                "if" => siblings.if_schema = Some(value),
                "then" => siblings.then_schema = Some(value),
                "else" => siblings.else_schema = Some(value),
                "prefixItems" => {
                    let keyword = PrefixItems::compile(self, value, depth)?;
                    let id = self.push(keyword);
                    siblings.array_group.push(id);
                }
                "items" => {
                    let keyword = Items::compile(self, value, depth)?;
                    let id = self.push(keyword);
                    siblings.array_group.push(id);
                }
                "additionalItems" => {
                    let subschema = Subschema::compile(self, value, "additionalItems", depth)?;
                    let id = self.push(Keyword::AdditionalItems(subschema));
                    siblings.array_group.push(id);
                }
                "unevaluatedItems" => {
                    let subschema = Subschema::compile(self, value, "unevaluatedItems", depth)?;
                    siblings.unevaluated_items = Some(self.push(Keyword::UnevaluatedItems(subschema)));
                }
                "properties" => {
                    let keyword = Properties::compile(self, value, depth)?;
                    let id = self.push(keyword);
                    siblings.object_group.push(id);
                }
                "patternProperties" => {
                    let keyword = PatternProperties::compile(self, value, depth)?;
                    let id = self.push(keyword);
                    siblings.object_group.push(id);
                }
                "additionalProperties" => {
                    let subschema = Subschema::compile(self, value, "additionalProperties", depth)?;
                    let id = self.push(Keyword::AdditionalProperties(subschema));
                    siblings.object_group.push(id);
                }
                "unevaluatedProperties" => {
                    let subschema =
                        Subschema::compile(self, value, "unevaluatedProperties", depth)?;
                    siblings.unevaluated_properties =
                        Some(self.push(Keyword::UnevaluatedProperties(subschema)));
                }
                // Unrecognized keys carry no validation semantics.
                _ => {}
            }
        }
        wiring::wire(self, siblings, depth)
    }

    fn annotation(
        &mut self,
        siblings: &mut Siblings,
        name: &'static str,
        value: &Value,
    ) -> Result<(), CompileError> {
        let id = self.push(annotations::compile(name, value)?);
        siblings.assertions.push(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Validator;
    use crate::error::CompileErrorKind;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test]
    fn boolean_root_schemas() {
        let accept = Validator::new(&json!(true)).unwrap();
        assert!(accept.is_valid(&json!({"anything": [1, 2]})));
        let reject = Validator::new(&json!(false)).unwrap();
        assert!(!reject.is_valid(&json!(null)));
    }

    #[test_case(&json!([1]))]
    #[test_case(&json!("schema"))]
    #[test_case(&json!(42))]
    fn wrong_root_type(schema: &Value) {
        let error = Validator::new(schema).expect_err("Should fail");
        assert_eq!(error.keyword(), "$root");
    }

    #[test]
    fn from_slice() {
        let compiled = Validator::from_slice(br#"{"minimum": 0}"#).unwrap();
        assert!(compiled.is_valid(&json!(1)));
        assert!(!compiled.is_valid(&json!(-1)));
        assert!(Validator::from_slice(b"{not json").is_err());
    }

    #[test]
    fn unknown_keywords_are_ignored() {
        let compiled = Validator::new(&json!({"x-vendor": {"минимум": 1}, "minimum": 0})).unwrap();
        assert!(compiled.is_valid(&json!(5)));
    }

    #[test]
    fn deeply_nested_schema_trips_the_guard() {
        let mut schema = json!({"type": "integer"});
        for _ in 0..600 {
            schema = json!({"properties": {"a": schema}});
        }
        let error = Validator::new(&schema).expect_err("Should hit the recursion budget");
        assert_eq!(error.kind(), CompileErrorKind::RecursionLimit);
    }

    #[test]
    fn compilation_is_idempotent() {
        // Two compilations of the same bytes produce plans with equal
        // outcomes.
        let schema = json!({
            "type": "object",
            "properties": {"a": {"type": "integer"}},
            "patternProperties": {"^x": {"type": "string"}},
            "additionalProperties": false,
            "required": ["a"],
        });
        let first = Validator::new(&schema).unwrap();
        let second = Validator::new(&schema).unwrap();
        for instance in [
            json!({"a": 1}),
            json!({"a": 1, "x1": "ok"}),
            json!({"a": 1, "y": 2}),
            json!({"b": 1}),
            json!(null),
        ] {
            assert_eq!(first.is_valid(&instance), second.is_valid(&instance));
        }
    }
}
