//! Constructor selection rules.
//!
//! - `ambiguous-constructor`: more than one constructor is designated
//! - `unresolved-constructor`: a constructible type has public constructors
//!   but none could be chosen

use crate::{
    analysis::{ResolvedElement, expects_bound_constructor},
    core::{MetadataKind, ResolveError, TypeIntrospector},
    issues::Issue,
    manifest::TypeCatalog,
};

pub fn check_ambiguous_constructor_issues(elements: &[ResolvedElement]) -> Vec<Issue> {
    elements
        .iter()
        .filter_map(|element| match &element.outcome {
            Err(error @ ResolveError::AmbiguousDesignatedConstructor { .. }) => {
                Some(Issue::ambiguous_constructor(element, error))
            }
            _ => None,
        })
        .collect()
}

pub fn check_unresolved_constructor_issues(
    catalog: &TypeCatalog,
    elements: &[ResolvedElement],
) -> Vec<Issue> {
    elements
        .iter()
        .filter(|element| {
            element.is_ok()
                && element.context.key.kind == MetadataKind::Type
                && element.context.binding_metadata.bound_constructor.is_none()
        })
        .filter_map(|element| {
            let ty = &element.context.key.model_type;
            let info = catalog.get(ty)?;
            if !expects_bound_constructor(catalog, info) {
                return None;
            }
            let arity = catalog
                .public_constructors(ty)
                .iter()
                .map(|ctor| ctor.arity())
                .max()
                .unwrap_or_default();
            Some(Issue::unresolved_constructor(&element.path, ty, arity))
        })
        .collect()
}
