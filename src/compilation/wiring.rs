//! The dependency-wiring pass.
//!
//! Some keywords are interdependent: one is evaluated only for the
//! instance children its siblings did not own. After all siblings of a
//! schema object are compiled, this pass partitions them, sorts the
//! array- and object-shape groups by priority, links each member to the
//! next through `alternate` references, binds `minContains`/`maxContains`
//! into `contains`, attaches `then`/`else` to `if`, and hands the
//! `unevaluated*` siblings to the logical applicators. Only chain heads
//! enter the plan; the tails are reached through the links.
use crate::{
    compilation::Compiler,
    error::CompileError,
    vocabularies::{applicator::if_::Conditional, Keyword, KeywordId, Plan},
};
use serde_json::Value;

/// The compiled siblings of one schema object, partitioned by shape.
#[derive(Debug, Default)]
pub(crate) struct Siblings<'s> {
    /// Assertions and annotations, in encounter order.
    pub(crate) assertions: Vec<KeywordId>,
    /// `allOf`/`anyOf`/`oneOf`/`not`, in encounter order.
    pub(crate) logic: Vec<KeywordId>,
    pub(crate) contains: Option<KeywordId>,
    pub(crate) min_contains: Option<u64>,
    pub(crate) max_contains: Option<u64>,
    pub(crate) if_schema: Option<&'s Value>,
    pub(crate) then_schema: Option<&'s Value>,
    pub(crate) else_schema: Option<&'s Value>,
    /// `prefixItems`/`items`/`additionalItems`.
    pub(crate) array_group: Vec<KeywordId>,
    /// `properties`/`patternProperties`/`additionalProperties`.
    pub(crate) object_group: Vec<KeywordId>,
    pub(crate) unevaluated_items: Option<KeywordId>,
    pub(crate) unevaluated_properties: Option<KeywordId>,
}

pub(crate) fn wire(
    compiler: &mut Compiler,
    siblings: Siblings,
    depth: usize,
) -> Result<Plan, CompileError> {
    let Siblings {
        assertions,
        logic,
        contains,
        min_contains,
        max_contains,
        if_schema,
        then_schema,
        else_schema,
        mut array_group,
        mut object_group,
        unevaluated_items,
        unevaluated_properties,
    } = siblings;

    let mut plan = assertions;

    for &id in &logic {
        compiler.keywords[id].set_unevaluated(unevaluated_items, unevaluated_properties);
    }
    plan.extend_from_slice(&logic);

    if let Some(id) = contains {
        if let Keyword::Contains(inner) = &mut compiler.keywords[id] {
            inner.set_bounds(min_contains, max_contains);
        }
        plan.push(id);
    }

    match (if_schema, then_schema, else_schema) {
        (Some(if_schema), then_schema, else_schema) => {
            if then_schema.is_some() || else_schema.is_some() {
                let keyword =
                    Conditional::compile(compiler, if_schema, then_schema, else_schema, depth)?;
                let id = compiler.push(keyword);
                plan.push(id);
            } else {
                // `if` without a branch asserts nothing that could ever
                // apply - a structural mistake in the schema.
                return Err(CompileError::invalid_value("if"));
            }
        }
        (None, None, None) => {}
        // A branch without `if` asserts nothing that could ever apply -
        // a structural mistake in the schema.
        (None, _, _) => return Err(CompileError::invalid_value("if")),
    }

    // A lone `unevaluated*` keyword can drive every child itself, but only
    // when no in-place applicator sibling could have evaluated any of them;
    // with such siblings present it is reachable through their scope alone.
    let no_applicator_siblings = logic.is_empty() && if_schema.is_none();

    array_group.sort_by_key(|&id| compiler.keywords[id].priority());
    // `additionalItems` only covers positions left over by `prefixItems`
    // or `items`; without them in front it can never apply.
    if matches!(
        array_group.first(),
        Some(&id) if matches!(compiler.keywords[id], Keyword::AdditionalItems(_))
    ) {
        array_group.remove(0);
    }
    chain(
        compiler,
        array_group,
        unevaluated_items,
        no_applicator_siblings,
        &mut plan,
    );

    object_group.sort_by_key(|&id| compiler.keywords[id].priority());
    chain(
        compiler,
        object_group,
        unevaluated_properties,
        no_applicator_siblings,
        &mut plan,
    );

    Ok(plan.into_boxed_slice())
}

/// Link a priority-sorted group into a fallback chain, with the
/// `unevaluated*` sibling as the terminal link, and emit the head into the
/// plan.
fn chain(
    compiler: &mut Compiler,
    mut group: Vec<KeywordId>,
    unevaluated: Option<KeywordId>,
    standalone_unevaluated: bool,
    plan: &mut Vec<KeywordId>,
) {
    if let Some(id) = unevaluated {
        if !group.is_empty() || standalone_unevaluated {
            group.push(id);
        }
    }
    if group.is_empty() {
        return;
    }
    for index in 0..group.len() - 1 {
        let next = group[index + 1];
        compiler.keywords[group[index]].set_alternate(next);
    }
    plan.push(group[0]);
}
