//! In-memory introspector for unit tests.

use std::collections::HashMap;

use super::introspect::TypeIntrospector;
use super::markers::Marker;
use super::types::{ConstructorInfo, ParameterInfo, TypeKind, TypeRef};

#[derive(Default)]
pub struct FakeTypes {
    types: HashMap<TypeRef, FakeType>,
}

struct FakeType {
    kind: TypeKind,
    markers: Vec<Marker>,
    constructors: Vec<ConstructorInfo>,
}

impl FakeTypes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(
        mut self,
        name: &str,
        kind: TypeKind,
        markers: Vec<Marker>,
        constructors: Vec<ConstructorInfo>,
    ) -> Self {
        self.types.insert(
            name.into(),
            FakeType {
                kind,
                markers,
                constructors,
            },
        );
        self
    }

    pub fn with_class(self, name: &str, constructors: Vec<ConstructorInfo>) -> Self {
        self.with_type(name, TypeKind::Class, Vec::new(), constructors)
    }
}

impl TypeIntrospector for FakeTypes {
    fn type_kind(&self, ty: &TypeRef) -> Option<TypeKind> {
        self.types.get(ty).map(|t| t.kind)
    }

    fn constructors(&self, ty: &TypeRef) -> &[ConstructorInfo] {
        self.types
            .get(ty)
            .map(|t| t.constructors.as_slice())
            .unwrap_or_default()
    }

    fn declared_markers(&self, ty: &TypeRef) -> &[Marker] {
        self.types
            .get(ty)
            .map(|t| t.markers.as_slice())
            .unwrap_or_default()
    }
}

/// Constructor with `arity` placeholder parameters.
pub fn ctor(arity: usize) -> ConstructorInfo {
    let parameters = (0..arity)
        .map(|i| ParameterInfo::new(format!("p{}", i), "string"))
        .collect();
    ConstructorInfo::new(parameters)
}
