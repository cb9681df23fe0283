//! Capability markers attached to types, properties, parameters, and constructors.
//!
//! A marker may carry any combination of capabilities. The [`Capabilities`]
//! trait exposes each one with a "not provided" default, and [`Marker`]
//! dispatches to the concrete marker type through `enum_dispatch`, so the
//! resolver never inspects variants directly.
//!
//! Markers are declared in manifests as externally tagged objects:
//!
//! ```json
//! [{ "fromQuery": { "name": "q" } }, { "bind": { "include": ["Id", "Name"] } }]
//! ```

use std::{fmt, sync::Arc};

use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};

use super::types::{PropertyInfo, TypeRef};

/// Predicate deciding whether a property participates in binding.
pub type PropertyFilter = Arc<dyn Fn(&PropertyInfo) -> bool + Send + Sync>;

// ============================================================
// Binding source and behavior
// ============================================================

/// Where bound data originates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BindingSource {
    Body,
    Custom,
    Form,
    FormFile,
    Header,
    ModelBinding,
    Path,
    Query,
    Services,
    Special,
}

impl fmt::Display for BindingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BindingSource::Body => "body",
            BindingSource::Custom => "custom",
            BindingSource::Form => "form",
            BindingSource::FormFile => "form-file",
            BindingSource::Header => "header",
            BindingSource::ModelBinding => "model-binding",
            BindingSource::Path => "path",
            BindingSource::Query => "query",
            BindingSource::Services => "services",
            BindingSource::Special => "special",
        };
        f.write_str(name)
    }
}

/// Whether an element may or must be bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BindingBehavior {
    Never,
    Optional,
    Required,
}

impl fmt::Display for BindingBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingBehavior::Never => write!(f, "never"),
            BindingBehavior::Optional => write!(f, "optional"),
            BindingBehavior::Required => write!(f, "required"),
        }
    }
}

// ============================================================
// Capabilities
// ============================================================

/// Resolution capabilities a marker may implement.
///
/// Every method defaults to "not provided"; marker types override only the
/// capabilities they carry.
#[enum_dispatch]
pub trait Capabilities {
    /// Name-provider capability.
    fn model_name(&self) -> Option<&str> {
        None
    }

    /// Binder-type-provider capability.
    fn binder_type(&self) -> Option<&TypeRef> {
        None
    }

    /// Binding-source-provider capability.
    fn binding_source(&self) -> Option<BindingSource> {
        None
    }

    /// True when the marker implements the property-filter-provider capability,
    /// even if it currently exposes no predicate.
    fn is_property_filter_provider(&self) -> bool {
        false
    }

    /// The exposed filter predicate, if any.
    fn property_filter(&self) -> Option<PropertyFilter> {
        None
    }

    /// Binding-behavior capability.
    fn binding_behavior(&self) -> Option<BindingBehavior> {
        None
    }

    /// True when placed on a constructor to make it the designated binding constructor.
    fn designates_constructor(&self) -> bool {
        false
    }
}

// ============================================================
// Marker Enum
// ============================================================

/// A declarative capability marker.
#[enum_dispatch(Capabilities)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Marker {
    FromQuery(FromQuery),
    FromRoute(FromRoute),
    FromHeader(FromHeader),
    FromForm(FromForm),
    FromBody(FromBody),
    FromServices(FromServices),
    ModelBinder(ModelBinder),
    Bind(Bind),
    BindExclude(BindExclude),
    BindNever(BindNever),
    BindRequired(BindRequired),
    BindBehavior(BindBehavior),
    BindingConstructor(BindingConstructor),
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Marker::FromQuery(m) => write_named(f, "fromQuery", m.name.as_deref()),
            Marker::FromRoute(m) => write_named(f, "fromRoute", m.name.as_deref()),
            Marker::FromHeader(m) => write_named(f, "fromHeader", m.name.as_deref()),
            Marker::FromForm(m) => write_named(f, "fromForm", m.name.as_deref()),
            Marker::FromBody(_) => write!(f, "fromBody"),
            Marker::FromServices(_) => write!(f, "fromServices"),
            Marker::ModelBinder(m) => {
                let mut parts = Vec::new();
                if let Some(name) = &m.name {
                    parts.push(format!("name: {}", name));
                }
                if let Some(binder_type) = &m.binder_type {
                    parts.push(format!("binderType: {}", binder_type));
                }
                if let Some(source) = m.binding_source {
                    parts.push(format!("source: {}", source));
                }
                write!(f, "modelBinder({})", parts.join(", "))
            }
            Marker::Bind(m) => match &m.prefix {
                Some(prefix) => write!(
                    f,
                    "bind(prefix: {}, include: [{}])",
                    prefix,
                    m.include.join(", ")
                ),
                None => write!(f, "bind(include: [{}])", m.include.join(", ")),
            },
            Marker::BindExclude(m) => write!(f, "bindExclude([{}])", m.exclude.join(", ")),
            Marker::BindNever(_) => write!(f, "bindNever"),
            Marker::BindRequired(_) => write!(f, "bindRequired"),
            Marker::BindBehavior(m) => write!(f, "bindBehavior({})", m.behavior),
            Marker::BindingConstructor(_) => write!(f, "bindingConstructor"),
        }
    }
}

fn write_named(f: &mut fmt::Formatter<'_>, marker: &str, name: Option<&str>) -> fmt::Result {
    match name {
        Some(name) => write!(f, "{}(\"{}\")", marker, name),
        None => write!(f, "{}", marker),
    }
}

// ============================================================
// Source markers
// ============================================================

/// Bind from the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FromQuery {
    pub name: Option<String>,
}

impl Capabilities for FromQuery {
    fn model_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn binding_source(&self) -> Option<BindingSource> {
        Some(BindingSource::Query)
    }
}

/// Bind from a route value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FromRoute {
    pub name: Option<String>,
}

impl Capabilities for FromRoute {
    fn model_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn binding_source(&self) -> Option<BindingSource> {
        Some(BindingSource::Path)
    }
}

/// Bind from a request header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FromHeader {
    pub name: Option<String>,
}

impl Capabilities for FromHeader {
    fn model_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn binding_source(&self) -> Option<BindingSource> {
        Some(BindingSource::Header)
    }
}

/// Bind from form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FromForm {
    pub name: Option<String>,
}

impl Capabilities for FromForm {
    fn model_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn binding_source(&self) -> Option<BindingSource> {
        Some(BindingSource::Form)
    }
}

/// Bind from the request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FromBody {}

impl Capabilities for FromBody {
    fn binding_source(&self) -> Option<BindingSource> {
        Some(BindingSource::Body)
    }
}

/// Resolve from the service container instead of the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FromServices {}

impl Capabilities for FromServices {
    fn binding_source(&self) -> Option<BindingSource> {
        Some(BindingSource::Services)
    }
}

/// General-purpose override carrying a name, a binder type and a source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ModelBinder {
    pub name: Option<String>,
    pub binder_type: Option<TypeRef>,
    pub binding_source: Option<BindingSource>,
}

impl Capabilities for ModelBinder {
    fn model_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn binder_type(&self) -> Option<&TypeRef> {
        self.binder_type.as_ref()
    }

    fn binding_source(&self) -> Option<BindingSource> {
        // An explicit binder type without a source binds as custom.
        self.binding_source
            .or_else(|| self.binder_type.as_ref().map(|_| BindingSource::Custom))
    }
}

// ============================================================
// Filter markers
// ============================================================

/// Restrict binding to the listed properties, optionally under a prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Bind {
    pub prefix: Option<String>,
    pub include: Vec<String>,
}

impl Bind {
    pub fn include<I, S>(properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefix: None,
            include: properties.into_iter().map(Into::into).collect(),
        }
    }
}

impl Capabilities for Bind {
    fn model_name(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    fn is_property_filter_provider(&self) -> bool {
        true
    }

    fn property_filter(&self) -> Option<PropertyFilter> {
        if self.include.is_empty() {
            return None;
        }
        let include = self.include.clone();
        Some(Arc::new(move |property: &PropertyInfo| include.contains(&property.name)))
    }
}

/// Exclude the listed properties from binding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BindExclude {
    pub exclude: Vec<String>,
}

impl BindExclude {
    pub fn exclude<I, S>(properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            exclude: properties.into_iter().map(Into::into).collect(),
        }
    }
}

impl Capabilities for BindExclude {
    fn is_property_filter_provider(&self) -> bool {
        true
    }

    fn property_filter(&self) -> Option<PropertyFilter> {
        if self.exclude.is_empty() {
            return None;
        }
        let exclude = self.exclude.clone();
        Some(Arc::new(move |property: &PropertyInfo| !exclude.contains(&property.name)))
    }
}

// ============================================================
// Behavior markers
// ============================================================

/// Never bind this element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BindNever {}

impl Capabilities for BindNever {
    fn binding_behavior(&self) -> Option<BindingBehavior> {
        Some(BindingBehavior::Never)
    }
}

/// Binding this element is mandatory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BindRequired {}

impl Capabilities for BindRequired {
    fn binding_behavior(&self) -> Option<BindingBehavior> {
        Some(BindingBehavior::Required)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BindBehavior {
    pub behavior: BindingBehavior,
}

impl Capabilities for BindBehavior {
    fn binding_behavior(&self) -> Option<BindingBehavior> {
        Some(self.behavior)
    }
}

// ============================================================
// Constructor markers
// ============================================================

/// Marks the constructor the binding system must use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BindingConstructor {}

impl Capabilities for BindingConstructor {
    fn designates_constructor(&self) -> bool {
        true
    }
}
