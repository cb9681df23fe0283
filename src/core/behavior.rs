//! Binding-behavior lookup.

use tracing::trace;

use super::introspect::TypeIntrospector;
use super::markers::{BindingBehavior, Capabilities, Marker};
use super::metadata::ResolutionContext;
use super::types::MetadataKind;

/// Find the binding behavior governing the element described by `context`.
///
/// Properties prefer their own markers and fall back to the markers declared
/// on the containing type. Parameters only look at their own markers. Types
/// have no behavior lookup.
pub fn find_binding_behavior(
    context: &ResolutionContext,
    types: &dyn TypeIntrospector,
) -> Option<BindingBehavior> {
    match context.key.kind {
        MetadataKind::Property => first_behavior(&context.property_attributes).or_else(|| {
            let container = context.key.container_type.as_ref()?;
            let behavior = first_behavior(types.declared_markers(container));
            if behavior.is_some() {
                trace!(key = %context.key, %container, "behavior inherited from container");
            }
            behavior
        }),
        MetadataKind::Parameter => first_behavior(&context.parameter_attributes),
        MetadataKind::Type => None,
    }
}

fn first_behavior(markers: &[Marker]) -> Option<BindingBehavior> {
    markers.iter().find_map(|marker| marker.binding_behavior())
}
