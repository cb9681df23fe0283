//! Resolves every element of a catalog.
//!
//! Each type is resolved together with its properties and, when a bound
//! constructor was chosen, that constructor's parameters. Types are processed
//! in parallel; results come back in catalog order.

use rayon::prelude::*;

use crate::core::{MetadataResolver, ResolutionContext, ResolveError, TypeIntrospector};
use crate::manifest::{TypeCatalog, TypeInfo, parameter_context, property_context, type_context};

/// One resolved element and the outcome of resolving it.
#[derive(Debug, Clone)]
pub struct ResolvedElement {
    /// Manifest the owning type was declared in.
    pub path: String,
    /// Context with its `binding_metadata` populated on success.
    pub context: ResolutionContext,
    pub outcome: Result<(), ResolveError>,
}

impl ResolvedElement {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

pub fn resolve_catalog(catalog: &TypeCatalog) -> Vec<ResolvedElement> {
    let types: Vec<&TypeInfo> = catalog.types().collect();
    let resolver = MetadataResolver::new(catalog);

    types
        .par_iter()
        .flat_map_iter(|info| resolve_type_elements(catalog, &resolver, info))
        .collect()
}

/// Resolve a type, its properties, and its bound constructor's parameters.
pub fn resolve_type_elements(
    catalog: &TypeCatalog,
    resolver: &MetadataResolver<'_>,
    info: &TypeInfo,
) -> Vec<ResolvedElement> {
    let path = catalog
        .source_path(&info.name)
        .unwrap_or_default()
        .to_string();
    let resolve = |mut context: ResolutionContext| {
        let outcome = resolver.resolve(Some(&mut context));
        ResolvedElement {
            path: path.clone(),
            context,
            outcome,
        }
    };

    let type_element = resolve(type_context(info));
    let parameters = type_element
        .context
        .binding_metadata
        .bound_constructor
        .as_ref()
        .map(|ctor| ctor.parameters.clone())
        .unwrap_or_default();

    let mut elements = vec![type_element];
    elements.extend(
        info.properties
            .iter()
            .map(|property| resolve(property_context(catalog, &info.name, property))),
    );
    elements.extend(
        parameters
            .iter()
            .map(|parameter| resolve(parameter_context(catalog, parameter))),
    );
    elements
}

/// True when `info` is a constructible type that has public constructors.
pub fn expects_bound_constructor(catalog: &TypeCatalog, info: &TypeInfo) -> bool {
    info.kind.is_constructible() && !catalog.public_constructors(&info.name).is_empty()
}
