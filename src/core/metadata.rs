//! Resolution input and output records.

use super::filter::PropertyFilterProvider;
use super::markers::{BindingSource, Marker};
use super::types::{ConstructorInfo, PropertyInfo, ResolutionKey, TypeRef};

/// Binding rules resolved for one element.
#[derive(Debug, Clone, PartialEq)]
pub struct BindingMetadata {
    pub binder_model_name: Option<String>,
    pub binder_type: Option<TypeRef>,
    pub binding_source: Option<BindingSource>,
    pub property_filter_provider: Option<PropertyFilterProvider>,
    pub is_binding_allowed: bool,
    /// Implies `is_binding_allowed`.
    pub is_binding_required: bool,
    pub bound_constructor: Option<ConstructorInfo>,
}

impl Default for BindingMetadata {
    fn default() -> Self {
        Self {
            binder_model_name: None,
            binder_type: None,
            binding_source: None,
            property_filter_provider: None,
            is_binding_allowed: true,
            is_binding_required: false,
            bound_constructor: None,
        }
    }
}

impl BindingMetadata {
    /// Whether `property` participates in binding under this metadata's filter.
    pub fn includes_property(&self, property: &PropertyInfo) -> bool {
        self.property_filter_provider
            .as_ref()
            .is_none_or(|provider| provider.accepts(property))
    }
}

/// Everything the resolver reads for one element, plus the record it fills in.
#[derive(Debug, Clone)]
pub struct ResolutionContext {
    pub key: ResolutionKey,
    /// Markers on the element, in declaration order.
    pub attributes: Vec<Marker>,
    /// Markers on the property itself (property resolutions only).
    pub property_attributes: Vec<Marker>,
    /// Markers on the parameter itself (parameter resolutions only).
    pub parameter_attributes: Vec<Marker>,
    pub binding_metadata: BindingMetadata,
}

impl ResolutionContext {
    pub fn new(key: ResolutionKey, attributes: Vec<Marker>) -> Self {
        Self {
            key,
            attributes,
            property_attributes: Vec::new(),
            parameter_attributes: Vec::new(),
            binding_metadata: BindingMetadata::default(),
        }
    }

    pub fn with_property_attributes(mut self, markers: Vec<Marker>) -> Self {
        self.property_attributes = markers;
        self
    }

    pub fn with_parameter_attributes(mut self, markers: Vec<Marker>) -> Self {
        self.parameter_attributes = markers;
        self
    }
}
