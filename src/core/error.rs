use thiserror::Error;

/// Errors raised while resolving binding metadata.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("no resolution context was provided")]
    MissingContext,

    #[error(
        "type '{type_name}' has {count} constructors marked as the binding constructor"
    )]
    AmbiguousDesignatedConstructor { type_name: String, count: usize },
}

impl ResolveError {
    /// Suggested fix, shown as a hint by the CLI.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            ResolveError::MissingContext => None,
            ResolveError::AmbiguousDesignatedConstructor { .. } => {
                Some("keep `bindingConstructor` on exactly one public constructor")
            }
        }
    }
}
