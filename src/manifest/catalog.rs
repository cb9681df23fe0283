//! In-memory type catalog built from model manifests.

use std::collections::HashMap;

use tracing::warn;

use super::model::{ModelManifest, TypeInfo};
use crate::core::{ConstructorInfo, Marker, TypeIntrospector, TypeKind, TypeRef};

/// A type declared a second time; the first declaration is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateType {
    pub name: TypeRef,
    pub first_path: String,
    pub duplicate_path: String,
}

/// Where a type came from.
#[derive(Debug, Clone)]
struct CatalogEntry {
    info: TypeInfo,
    path: String,
}

/// All known types, in declaration order.
#[derive(Debug, Default)]
pub struct TypeCatalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<TypeRef, usize>,
}

impl TypeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog from in-memory types, mainly for tests and library callers.
    pub fn from_types(types: Vec<TypeInfo>) -> Self {
        let mut catalog = Self::new();
        catalog.add_manifest("<memory>", ModelManifest { types });
        catalog
    }

    /// Merge a manifest. Returns the types that were already declared.
    pub fn add_manifest(&mut self, path: &str, manifest: ModelManifest) -> Vec<DuplicateType> {
        let mut duplicates = Vec::new();

        for info in manifest.types {
            if let Some(&existing) = self.index.get(&info.name) {
                let first_path = self.entries[existing].path.clone();
                warn!(
                    ty = %info.name,
                    first = %first_path,
                    duplicate = %path,
                    "duplicate type declaration"
                );
                duplicates.push(DuplicateType {
                    name: info.name,
                    first_path,
                    duplicate_path: path.to_string(),
                });
                continue;
            }
            self.index.insert(info.name.clone(), self.entries.len());
            self.entries.push(CatalogEntry {
                info,
                path: path.to_string(),
            });
        }

        duplicates
    }

    pub fn get(&self, ty: &TypeRef) -> Option<&TypeInfo> {
        self.index.get(ty).map(|&i| &self.entries[i].info)
    }

    /// Manifest path a type was declared in.
    pub fn source_path(&self, ty: &TypeRef) -> Option<&str> {
        self.index.get(ty).map(|&i| self.entries[i].path.as_str())
    }

    pub fn types(&self) -> impl Iterator<Item = &TypeInfo> {
        self.entries.iter().map(|entry| &entry.info)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TypeIntrospector for TypeCatalog {
    fn type_kind(&self, ty: &TypeRef) -> Option<TypeKind> {
        self.get(ty).map(|info| info.kind)
    }

    fn constructors(&self, ty: &TypeRef) -> &[ConstructorInfo] {
        self.get(ty)
            .map(|info| info.constructors.as_slice())
            .unwrap_or_default()
    }

    fn declared_markers(&self, ty: &TypeRef) -> &[Marker] {
        self.get(ty)
            .map(|info| info.markers.as_slice())
            .unwrap_or_default()
    }
}
