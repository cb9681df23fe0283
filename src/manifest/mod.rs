//! Model manifests: the on-disk description of types, their markers,
//! constructors, and properties.
//!
//! - `model`: Manifest format, parsing, and validation
//! - `catalog`: `TypeCatalog`, the `TypeIntrospector` built from manifests
//! - `discovery`: Resolution contexts for types, properties, and parameters
//! - `scanner`: Finding manifest files on disk
//! - `workspace`: Config + scan + parse in one step

pub mod catalog;
pub mod discovery;
pub mod model;
pub mod scanner;
pub mod workspace;

pub use catalog::{DuplicateType, TypeCatalog};
pub use discovery::{parameter_context, property_context, type_context};
pub use model::{ManifestError, ModelManifest, TypeInfo};
pub use workspace::{ManifestFailure, Workspace};
