//! Bound-constructor selection.
//!
//! Priority chain: an explicitly designated constructor, then a parameterless
//! one, then the single constructor with the most parameters. Two designated
//! constructors are a configuration error; a tie for the most parameters just
//! means no constructor is chosen.

use tracing::debug;

use super::error::ResolveError;
use super::introspect::TypeIntrospector;
use super::types::{ConstructorInfo, TypeRef};

pub fn find_bound_constructor(
    ty: &TypeRef,
    types: &dyn TypeIntrospector,
) -> Result<Option<ConstructorInfo>, ResolveError> {
    match types.type_kind(ty) {
        Some(kind) if kind.is_constructible() => {}
        _ => return Ok(None),
    }

    let constructors = types.public_constructors(ty);
    if constructors.is_empty() {
        return Ok(None);
    }

    let designated: Vec<&ConstructorInfo> = constructors
        .iter()
        .copied()
        .filter(|c| c.is_designated())
        .collect();
    match designated.as_slice() {
        [] => {}
        [only] => return Ok(Some((*only).clone())),
        _ => {
            return Err(ResolveError::AmbiguousDesignatedConstructor {
                type_name: ty.to_string(),
                count: designated.len(),
            });
        }
    }

    if let Some(parameterless) = constructors.iter().find(|c| c.parameters.is_empty()) {
        return Ok(Some((*parameterless).clone()));
    }

    Ok(longest_unambiguous(ty, &constructors).cloned())
}

/// The constructor with the most parameters, unless several share that count.
fn longest_unambiguous<'a>(
    ty: &TypeRef,
    constructors: &[&'a ConstructorInfo],
) -> Option<&'a ConstructorInfo> {
    let longest = constructors.iter().map(|c| c.arity()).max()?;
    let mut top = constructors.iter().filter(|c| c.arity() == longest);

    match (top.next(), top.next()) {
        (Some(only), None) => Some(*only),
        _ => {
            debug!(%ty, arity = longest, "several constructors share the longest signature");
            None
        }
    }
}
