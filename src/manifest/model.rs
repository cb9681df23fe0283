//! Model manifest format and loading.
//!
//! A manifest is a JSON file listing types with their markers, constructors,
//! and properties:
//!
//! ```json
//! {
//!   "types": [{
//!     "name": "Order",
//!     "markers": [{ "bindRequired": {} }],
//!     "constructors": [{ "parameters": [{ "name": "id", "type": "int" }] }],
//!     "properties": [{ "name": "Id", "type": "int" }]
//!   }]
//! }
//! ```

use std::{fs, path::Path, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{ConstructorInfo, Marker, PropertyInfo, TypeKind, TypeRef};

/// Qualified identifier with optional generic arguments, e.g. `Shop.Order` or `List<int>`.
static TYPE_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let ident = r"[A-Za-z_][A-Za-z0-9_]*";
    Regex::new(&format!(r"^{ident}(\.{ident})*(<[A-Za-z0-9_.,<> ]+>)?(\[\])?\??$")).unwrap()
});

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid manifest JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid type name '{name}'")]
    InvalidTypeName { name: String },

    #[error("type '{type_name}' declares property '{name}' more than once")]
    DuplicateProperty { type_name: String, name: String },
}

/// One declared type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeInfo {
    pub name: TypeRef,
    #[serde(default)]
    pub kind: TypeKind,
    #[serde(default)]
    pub markers: Vec<Marker>,
    #[serde(default)]
    pub constructors: Vec<ConstructorInfo>,
    #[serde(default)]
    pub properties: Vec<PropertyInfo>,
}

impl TypeInfo {
    pub fn new(name: impl Into<TypeRef>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            markers: Vec::new(),
            constructors: Vec::new(),
            properties: Vec::new(),
        }
    }

    pub fn property(&self, name: &str) -> Option<&PropertyInfo> {
        self.properties.iter().find(|p| p.name == name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelManifest {
    #[serde(default)]
    pub types: Vec<TypeInfo>,
}

impl ModelManifest {
    pub fn parse(content: &str) -> Result<Self, ManifestError> {
        let manifest: ModelManifest = serde_json::from_str(content)?;
        manifest.validate()?;
        Ok(manifest)
    }

    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Check type names and property uniqueness.
    pub fn validate(&self) -> Result<(), ManifestError> {
        for ty in &self.types {
            check_type_name(&ty.name)?;
            for (index, property) in ty.properties.iter().enumerate() {
                check_type_name(&property.property_type)?;
                let earlier = &ty.properties[..index];
                if earlier.iter().any(|p| p.name == property.name) {
                    return Err(ManifestError::DuplicateProperty {
                        type_name: ty.name.to_string(),
                        name: property.name.clone(),
                    });
                }
            }
            for parameter in ty.constructors.iter().flat_map(|c| &c.parameters) {
                check_type_name(&parameter.parameter_type)?;
            }
        }
        Ok(())
    }
}

fn check_type_name(name: &TypeRef) -> Result<(), ManifestError> {
    if TYPE_NAME_REGEX.is_match(name.as_str()) {
        Ok(())
    } else {
        Err(ManifestError::InvalidTypeName {
            name: name.to_string(),
        })
    }
}
