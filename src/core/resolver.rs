//! Metadata resolution for a single element.
//!
//! The resolver scans the element's markers once per capability, in
//! declaration order, with the first usable match winning. Filter providers
//! are all collected and combined. Behavior and bound constructor come from
//! [`find_binding_behavior`] and [`find_bound_constructor`].

use tracing::debug;

use super::behavior::find_binding_behavior;
use super::constructor::find_bound_constructor;
use super::error::ResolveError;
use super::filter::{CompositeFilter, PropertyFilterProvider};
use super::introspect::TypeIntrospector;
use super::markers::{BindingBehavior, Capabilities, Marker};
use super::metadata::{BindingMetadata, ResolutionContext};
use super::types::MetadataKind;

/// Populates [`BindingMetadata`] from a [`ResolutionContext`].
///
/// Holds no state besides the introspector, so one resolver can serve any
/// number of threads.
#[derive(Clone, Copy)]
pub struct MetadataResolver<'a> {
    types: &'a dyn TypeIntrospector,
}

impl<'a> MetadataResolver<'a> {
    pub fn new(types: &'a dyn TypeIntrospector) -> Self {
        Self { types }
    }

    /// Resolve the metadata for `context` and store it in
    /// `context.binding_metadata`.
    ///
    /// The record is computed separately and only committed once every step
    /// succeeded, so on error the context is left untouched.
    pub fn resolve(&self, context: Option<&mut ResolutionContext>) -> Result<(), ResolveError> {
        let context = context.ok_or(ResolveError::MissingContext)?;
        let metadata = self.build(context)?;

        debug!(
            key = %context.key,
            kind = %context.key.kind,
            name = ?metadata.binder_model_name,
            source = ?metadata.binding_source,
            allowed = metadata.is_binding_allowed,
            required = metadata.is_binding_required,
            "resolved binding metadata"
        );

        context.binding_metadata = metadata;
        Ok(())
    }

    fn build(&self, context: &ResolutionContext) -> Result<BindingMetadata, ResolveError> {
        let attributes = &context.attributes;
        let mut metadata = BindingMetadata {
            binder_model_name: attributes
                .iter()
                .find_map(|m| m.model_name().filter(|name| !name.is_empty()))
                .map(str::to_string),
            binder_type: attributes.iter().find_map(|m| m.binder_type()).cloned(),
            binding_source: attributes.iter().find_map(|m| m.binding_source()),
            property_filter_provider: filter_provider(attributes),
            ..Default::default()
        };

        if let Some(behavior) = find_binding_behavior(context, self.types) {
            metadata.is_binding_allowed = behavior != BindingBehavior::Never;
            metadata.is_binding_required = behavior == BindingBehavior::Required;
        }

        if context.key.kind == MetadataKind::Type {
            metadata.bound_constructor =
                find_bound_constructor(&context.key.model_type, self.types)?;
        }

        Ok(metadata)
    }
}

fn filter_provider(attributes: &[Marker]) -> Option<PropertyFilterProvider> {
    let mut providers: Vec<Marker> = attributes
        .iter()
        .filter(|m| m.is_property_filter_provider())
        .cloned()
        .collect();

    match providers.len() {
        0 => None,
        1 => providers.pop().map(PropertyFilterProvider::Single),
        _ => Some(PropertyFilterProvider::Composite(CompositeFilter::new(providers))),
    }
}
