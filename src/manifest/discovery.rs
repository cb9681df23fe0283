//! Builds resolution contexts from catalog entries.
//!
//! Element markers come first, followed by the markers declared on the
//! element's own type, so an explicit marker on a property or parameter
//! outranks one inherited from its type.

use super::catalog::TypeCatalog;
use super::model::TypeInfo;
use crate::core::{
    Marker, ParameterInfo, PropertyInfo, ResolutionContext, ResolutionKey, TypeIntrospector,
    TypeRef,
};

/// Context for resolving a type as a whole.
pub fn type_context(info: &TypeInfo) -> ResolutionContext {
    let key = ResolutionKey::for_type(info.name.clone());
    ResolutionContext::new(key, info.markers.clone())
}

/// Context for resolving `property` of `container`.
pub fn property_context(
    catalog: &TypeCatalog,
    container: &TypeRef,
    property: &PropertyInfo,
) -> ResolutionContext {
    let attributes = element_attributes(catalog, &property.markers, &property.property_type);
    let key = ResolutionKey::for_property(
        container.clone(),
        property.name.clone(),
        property.property_type.clone(),
    );
    ResolutionContext::new(key, attributes).with_property_attributes(property.markers.clone())
}

/// Context for resolving a constructor parameter.
pub fn parameter_context(catalog: &TypeCatalog, parameter: &ParameterInfo) -> ResolutionContext {
    let attributes = element_attributes(catalog, &parameter.markers, &parameter.parameter_type);
    let key =
        ResolutionKey::for_parameter(parameter.name.clone(), parameter.parameter_type.clone());
    ResolutionContext::new(key, attributes).with_parameter_attributes(parameter.markers.clone())
}

fn element_attributes(catalog: &TypeCatalog, own: &[Marker], ty: &TypeRef) -> Vec<Marker> {
    own.iter()
        .chain(catalog.declared_markers(ty))
        .cloned()
        .collect()
}
