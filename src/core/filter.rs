//! Property filter providers and their AND-composition.

use std::{fmt, sync::Arc, sync::OnceLock};

use super::markers::{Capabilities, Marker, PropertyFilter};
use super::types::PropertyInfo;

/// The property filter attached to resolved binding metadata.
///
/// A single filter marker is kept as-is; two or more are wrapped in a
/// [`CompositeFilter`].
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyFilterProvider {
    Single(Marker),
    Composite(CompositeFilter),
}

impl PropertyFilterProvider {
    /// The predicate exposed by this provider, if any.
    pub fn property_filter(&self) -> Option<PropertyFilter> {
        match self {
            PropertyFilterProvider::Single(marker) => marker.property_filter(),
            PropertyFilterProvider::Composite(composite) => Some(composite.property_filter()),
        }
    }

    /// Evaluate the filter for one property. A provider without a predicate
    /// accepts everything.
    pub fn accepts(&self, property: &PropertyInfo) -> bool {
        match self {
            PropertyFilterProvider::Single(marker) => {
                marker.property_filter().is_none_or(|f| f(property))
            }
            PropertyFilterProvider::Composite(composite) => composite.filter(property),
        }
    }

    /// The markers backing this provider, in declaration order.
    pub fn markers(&self) -> &[Marker] {
        match self {
            PropertyFilterProvider::Single(marker) => std::slice::from_ref(marker),
            PropertyFilterProvider::Composite(composite) => composite.providers(),
        }
    }
}

/// Combines several filter providers into one predicate with AND semantics.
///
/// The predicate list is built on first use. Providers exposing no predicate
/// are skipped, so a composite of only such providers accepts every property.
pub struct CompositeFilter {
    providers: Vec<Marker>,
    predicates: OnceLock<Vec<PropertyFilter>>,
}

impl CompositeFilter {
    pub fn new(providers: Vec<Marker>) -> Self {
        Self {
            providers,
            predicates: OnceLock::new(),
        }
    }

    pub fn providers(&self) -> &[Marker] {
        &self.providers
    }

    fn predicates(&self) -> &[PropertyFilter] {
        self.predicates.get_or_init(|| {
            self.providers
                .iter()
                .filter_map(|provider| provider.property_filter())
                .collect()
        })
    }

    /// Left-to-right, stops at the first rejecting predicate.
    pub fn filter(&self, property: &PropertyInfo) -> bool {
        self.predicates().iter().all(|p| p(property))
    }

    /// The composed predicate as a standalone value.
    pub fn property_filter(&self) -> PropertyFilter {
        let predicates = self.predicates().to_vec();
        Arc::new(move |property: &PropertyInfo| predicates.iter().all(|p| p(property)))
    }
}

impl Clone for CompositeFilter {
    fn clone(&self) -> Self {
        Self::new(self.providers.clone())
    }
}

impl PartialEq for CompositeFilter {
    fn eq(&self, other: &Self) -> bool {
        self.providers == other.providers
    }
}

impl fmt::Debug for CompositeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeFilter")
            .field("providers", &self.providers)
            .field("built", &self.predicates.get().is_some())
            .finish()
    }
}
