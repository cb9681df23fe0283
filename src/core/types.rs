//! Data model shared by the resolver and its collaborators.
//!
//! Everything here is plain data: type references, the shape of constructors,
//! parameters, and properties as reported by a [`TypeIntrospector`], and the
//! [`ResolutionKey`] identifying the element being resolved.
//!
//! [`TypeIntrospector`]: super::introspect::TypeIntrospector

use std::fmt;

use serde::{Deserialize, Serialize};

use super::markers::{Capabilities, Marker};

/// Reference to a model type by its fully qualified name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeRef(String);

impl TypeRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TypeRef {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// How a type can (or cannot) be instantiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeKind {
    /// Concrete reference type.
    #[default]
    Class,
    Abstract,
    Interface,
    /// Value type (struct-like); never built through a bound constructor.
    Value,
}

impl TypeKind {
    pub fn is_constructible(self) -> bool {
        matches!(self, TypeKind::Class)
    }
}

/// A constructor or method parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub parameter_type: TypeRef,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<Marker>,
}

impl ParameterInfo {
    pub fn new(name: impl Into<String>, parameter_type: impl Into<TypeRef>) -> Self {
        Self {
            name: name.into(),
            parameter_type: parameter_type.into(),
            markers: Vec::new(),
        }
    }

    pub fn with_markers(mut self, markers: Vec<Marker>) -> Self {
        self.markers = markers;
        self
    }
}

/// A settable property of a composite type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub property_type: TypeRef,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<Marker>,
}

impl PropertyInfo {
    pub fn new(name: impl Into<String>, property_type: impl Into<TypeRef>) -> Self {
        Self {
            name: name.into(),
            property_type: property_type.into(),
            markers: Vec::new(),
        }
    }

    pub fn with_markers(mut self, markers: Vec<Marker>) -> Self {
        self.markers = markers;
        self
    }
}

fn default_public() -> bool {
    true
}

fn is_public(public: &bool) -> bool {
    *public
}

/// A constructor as exposed by type introspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstructorInfo {
    #[serde(default = "default_public", skip_serializing_if = "is_public")]
    pub public: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<Marker>,
    #[serde(default)]
    pub parameters: Vec<ParameterInfo>,
}

impl ConstructorInfo {
    pub fn new(parameters: Vec<ParameterInfo>) -> Self {
        Self {
            public: true,
            markers: Vec::new(),
            parameters,
        }
    }

    pub fn with_markers(mut self, markers: Vec<Marker>) -> Self {
        self.markers = markers;
        self
    }

    pub fn private(mut self) -> Self {
        self.public = false;
        self
    }

    /// Number of parameters.
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    /// True when the constructor carries a designated-constructor marker.
    pub fn is_designated(&self) -> bool {
        self.markers.iter().any(|m| m.designates_constructor())
    }

    /// Human readable signature, e.g. `Order(int id, string name)`.
    pub fn signature(&self, declaring_type: &TypeRef) -> String {
        let params = self
            .parameters
            .iter()
            .map(|p| format!("{} {}", p.parameter_type, p.name))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}({})", declaring_type, params)
    }
}

/// Which kind of element a resolution targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetadataKind {
    Type,
    Property,
    Parameter,
}

impl fmt::Display for MetadataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataKind::Type => write!(f, "type"),
            MetadataKind::Property => write!(f, "property"),
            MetadataKind::Parameter => write!(f, "parameter"),
        }
    }
}

/// Identifies the element being resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolutionKey {
    pub kind: MetadataKind,
    pub model_type: TypeRef,
    /// Enclosing type; only set for [`MetadataKind::Property`].
    pub container_type: Option<TypeRef>,
    /// Property or parameter name.
    pub name: Option<String>,
}

impl ResolutionKey {
    pub fn for_type(model_type: impl Into<TypeRef>) -> Self {
        Self {
            kind: MetadataKind::Type,
            model_type: model_type.into(),
            container_type: None,
            name: None,
        }
    }

    pub fn for_property(
        container_type: impl Into<TypeRef>,
        name: impl Into<String>,
        model_type: impl Into<TypeRef>,
    ) -> Self {
        Self {
            kind: MetadataKind::Property,
            model_type: model_type.into(),
            container_type: Some(container_type.into()),
            name: Some(name.into()),
        }
    }

    pub fn for_parameter(name: impl Into<String>, model_type: impl Into<TypeRef>) -> Self {
        Self {
            kind: MetadataKind::Parameter,
            model_type: model_type.into(),
            container_type: None,
            name: Some(name.into()),
        }
    }
}

impl fmt::Display for ResolutionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.container_type, &self.name) {
            (Some(container), Some(name)) => write!(f, "{}.{}", container, name),
            (None, Some(name)) => write!(f, "{} {}", self.model_type, name),
            _ => write!(f, "{}", self.model_type),
        }
    }
}
