//! The closed set of recognized keywords.
//!
//! Every compiled keyword is a variant of [`Keyword`]; payloads live in the
//! per-keyword modules under `validation` (sibling-independent assertions)
//! and `applicator` (keywords that apply sub-schemas to parts of the
//! instance). Dispatch is an exhaustive `match`, so the whole evaluation
//! plan is a flat, cache-friendly vector without virtual calls.
pub(crate) mod annotations;
pub(crate) mod applicator;
pub(crate) mod validation;

use crate::{
    compilation::Validator,
    error::ValidationError,
    validator::Scope,
};
use serde_json::Value;

/// Index of a keyword inside the arena owned by the compiled schema.
pub(crate) type KeywordId = usize;

/// An ordered evaluation plan: indices of the keywords of one (sub)schema.
pub(crate) type Plan = Box<[KeywordId]>;

#[derive(Debug)]
pub(crate) enum Keyword {
    // Assertions.
    Type(validation::type_::Type),
    Const(validation::const_::Const),
    Enum(validation::enum_::Enum),
    Maximum(validation::maximum::Maximum),
    Minimum(validation::minimum::Minimum),
    ExclusiveMaximum(validation::exclusive_maximum::ExclusiveMaximum),
    ExclusiveMinimum(validation::exclusive_minimum::ExclusiveMinimum),
    MultipleOf(validation::multiple_of::MultipleOf),
    MaxLength(validation::max_length::MaxLength),
    MinLength(validation::min_length::MinLength),
    Pattern(validation::pattern::Pattern),
    MaxItems(validation::max_items::MaxItems),
    MinItems(validation::min_items::MinItems),
    UniqueItems,
    Required(validation::required::Required),
    MaxProperties(validation::max_properties::MaxProperties),
    MinProperties(validation::min_properties::MinProperties),
    DependentRequired(validation::dependent_required::DependentRequired),
    // Annotations.
    Annotation(annotations::Annotation),
    Format(validation::format::Format),
    // Applicators.
    PropertyNames(applicator::property_names::PropertyNames),
    Properties(applicator::properties::Properties),
    PatternProperties(applicator::pattern_properties::PatternProperties),
    AdditionalProperties(applicator::Subschema),
    UnevaluatedProperties(applicator::Subschema),
    PrefixItems(applicator::prefix_items::PrefixItems),
    Items(applicator::items::Items),
    AdditionalItems(applicator::Subschema),
    UnevaluatedItems(applicator::Subschema),
    Contains(applicator::contains::Contains),
    AllOf(applicator::Logic),
    AnyOf(applicator::Logic),
    OneOf(applicator::Logic),
    Not(applicator::Logic),
    IfThenElse(applicator::if_::Conditional),
    /// The `false` boolean schema - nothing is allowed.
    FalseSchema,
}

impl Keyword {
    /// Ordering weight inside the array/object fallback chains. Only
    /// meaningful during the dependency-wiring pass.
    pub(crate) fn priority(&self) -> u8 {
        match self {
            Keyword::PrefixItems(_) | Keyword::Properties(_) => 1,
            Keyword::Items(_) | Keyword::PatternProperties(_) => 2,
            Keyword::AdditionalItems(_) | Keyword::AdditionalProperties(_) => 3,
            Keyword::UnevaluatedItems(_) | Keyword::UnevaluatedProperties(_) => 4,
            _ => 0,
        }
    }

    /// Link this keyword to the next member of its fallback chain.
    /// Keywords that always evaluate every child they are offered do not
    /// store a link - nothing can fall past them.
    pub(crate) fn set_alternate(&mut self, alternate: KeywordId) {
        match self {
            Keyword::Properties(inner) => inner.alternate = Some(alternate),
            Keyword::PatternProperties(inner) => inner.alternate = Some(alternate),
            Keyword::PrefixItems(inner) => inner.alternate = Some(alternate),
            Keyword::Items(inner) => inner.alternate = Some(alternate),
            _ => {}
        }
    }

    /// Hand the sibling `unevaluated*` keywords to a logical applicator so
    /// that its child schemas can consult them as a default fallback.
    pub(crate) fn set_unevaluated(
        &mut self,
        unevaluated_items: Option<KeywordId>,
        unevaluated_properties: Option<KeywordId>,
    ) {
        if let Keyword::AllOf(inner)
        | Keyword::AnyOf(inner)
        | Keyword::OneOf(inner)
        | Keyword::Not(inner) = self
        {
            inner.unevaluated_items = unevaluated_items;
            inner.unevaluated_properties = unevaluated_properties;
        }
    }

    pub(crate) fn validate<'i>(
        &self,
        schema: &Validator,
        instance: &'i Value,
        scope: Scope,
        depth: usize,
    ) -> Result<(), ValidationError<'i>> {
        match self {
            Keyword::Annotation(_) | Keyword::Format(_) => Ok(()),
            Keyword::FalseSchema => Err(ValidationError::false_schema(instance)),
            Keyword::Type(inner) => inner.validate(instance),
            Keyword::Const(inner) => inner.validate(instance),
            Keyword::Enum(inner) => inner.validate(instance),
            Keyword::Maximum(inner) => inner.validate(instance),
            Keyword::Minimum(inner) => inner.validate(instance),
            Keyword::ExclusiveMaximum(inner) => inner.validate(instance),
            Keyword::ExclusiveMinimum(inner) => inner.validate(instance),
            Keyword::MultipleOf(inner) => inner.validate(instance),
            Keyword::MaxLength(inner) => inner.validate(instance),
            Keyword::MinLength(inner) => inner.validate(instance),
            Keyword::Pattern(inner) => inner.validate(instance),
            Keyword::MaxItems(inner) => inner.validate(instance),
            Keyword::MinItems(inner) => inner.validate(instance),
            Keyword::UniqueItems => validation::unique_items::validate(instance),
            Keyword::Required(inner) => inner.validate(instance),
            Keyword::MaxProperties(inner) => inner.validate(instance),
            Keyword::MinProperties(inner) => inner.validate(instance),
            Keyword::DependentRequired(inner) => inner.validate(instance),
            Keyword::PropertyNames(inner) => inner.validate(schema, instance, depth),
            Keyword::Properties(inner) => inner.validate(schema, instance, scope, depth),
            Keyword::PatternProperties(inner) => inner.validate(schema, instance, scope, depth),
            Keyword::AdditionalProperties(inner) => {
                applicator::additional_properties::validate(inner, schema, instance, depth)
            }
            Keyword::UnevaluatedProperties(inner) => {
                applicator::unevaluated_properties::validate(inner, schema, instance, depth)
            }
            Keyword::PrefixItems(inner) => inner.validate(schema, instance, scope, depth),
            Keyword::Items(inner) => inner.validate(schema, instance, scope, depth),
            Keyword::AdditionalItems(inner) => {
                applicator::additional_items::validate(inner, schema, instance, depth)
            }
            Keyword::UnevaluatedItems(inner) => {
                applicator::unevaluated_items::validate(inner, schema, instance, depth)
            }
            Keyword::Contains(inner) => inner.validate(schema, instance, depth),
            Keyword::AllOf(inner) => applicator::all_of::validate(inner, schema, instance, depth),
            Keyword::AnyOf(inner) => applicator::any_of::validate(inner, schema, instance, depth),
            Keyword::OneOf(inner) => applicator::one_of::validate(inner, schema, instance, depth),
            Keyword::Not(inner) => applicator::not::validate(inner, schema, instance, depth),
            Keyword::IfThenElse(inner) => inner.validate(schema, instance, depth),
        }
    }

    /// Validate a single object member that an earlier chain keyword did
    /// not own. Only keywords that may appear in the object fallback chain
    /// are reachable here.
    pub(crate) fn validate_key<'i>(
        &self,
        schema: &Validator,
        key: &str,
        value: &'i Value,
        scope: Scope,
        depth: usize,
    ) -> Result<(), ValidationError<'i>> {
        match self {
            Keyword::PatternProperties(inner) => {
                inner.validate_key(schema, key, value, scope, depth)
            }
            Keyword::AdditionalProperties(inner) => {
                applicator::additional_properties::validate_key(inner, schema, key, value, depth)
            }
            Keyword::UnevaluatedProperties(inner) => {
                applicator::unevaluated_properties::validate_key(inner, schema, key, value, depth)
            }
            _ => unreachable!("object chains consist of object-shape keywords"),
        }
    }

    /// Validate a single array element that an earlier chain keyword did
    /// not own. Only keywords that may appear in the array fallback chain
    /// are reachable here.
    pub(crate) fn validate_item<'i>(
        &self,
        schema: &Validator,
        index: usize,
        item: &'i Value,
        scope: Scope,
        depth: usize,
    ) -> Result<(), ValidationError<'i>> {
        match self {
            Keyword::Items(inner) => inner.validate_item(schema, index, item, scope, depth),
            Keyword::AdditionalItems(inner) => {
                applicator::additional_items::validate_item(inner, schema, index, item, depth)
            }
            Keyword::UnevaluatedItems(inner) => {
                applicator::unevaluated_items::validate_item(inner, schema, index, item, depth)
            }
            _ => unreachable!("array chains consist of array-shape keywords"),
        }
    }
}
