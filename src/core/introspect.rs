//! Narrow view of type reflection used by the resolver.

use super::markers::Marker;
use super::types::{ConstructorInfo, TypeKind, TypeRef};

/// Answers the questions the resolver needs about a type.
///
/// Implementations return empty slices for unknown types.
pub trait TypeIntrospector: Send + Sync {
    /// Kind of the type, or `None` when the type is unknown.
    fn type_kind(&self, ty: &TypeRef) -> Option<TypeKind>;

    /// All declared constructors, public or not, in declaration order.
    fn constructors(&self, ty: &TypeRef) -> &[ConstructorInfo];

    /// Markers declared directly on the type (not inherited, not property-level).
    fn declared_markers(&self, ty: &TypeRef) -> &[Marker];

    /// Public constructors only.
    fn public_constructors(&self, ty: &TypeRef) -> Vec<&ConstructorInfo> {
        self.constructors(ty).iter().filter(|c| c.public).collect()
    }
}
