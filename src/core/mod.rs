//! Binding-metadata resolution core.
//!
//! ## Module Structure
//!
//! - `types`: Type references, constructors, properties, and resolution keys
//! - `markers`: Capability markers and the `Capabilities` trait
//! - `filter`: Property filter providers and `CompositeFilter`
//! - `metadata`: `ResolutionContext` input and `BindingMetadata` output
//! - `introspect`: The `TypeIntrospector` seam to type reflection
//! - `behavior`: Binding-behavior lookup (allowed / required)
//! - `constructor`: Bound-constructor selection
//! - `resolver`: `MetadataResolver`, tying the above together
//!
//! ## Resolution Order
//!
//! 1. Name, binder type, and binding source: first usable marker wins
//! 2. Property filter: all providers, composed with AND when more than one
//! 3. Binding behavior: property/parameter markers, then the container type
//! 4. Bound constructor: type resolutions only

pub mod behavior;
pub mod constructor;
pub mod error;
pub mod filter;
pub mod introspect;
pub mod markers;
pub mod metadata;
pub mod resolver;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use behavior::find_binding_behavior;
pub use constructor::find_bound_constructor;
pub use error::ResolveError;
pub use filter::{CompositeFilter, PropertyFilterProvider};
pub use introspect::TypeIntrospector;
pub use markers::{BindingBehavior, BindingSource, Capabilities, Marker, PropertyFilter};
pub use metadata::{BindingMetadata, ResolutionContext};
pub use resolver::MetadataResolver;
pub use types::{
    ConstructorInfo, MetadataKind, ParameterInfo, PropertyInfo, ResolutionKey, TypeKind, TypeRef,
};
