//! Rule implementations for `bindmeta check`.
//!
//! Pure functions over the loaded workspace and the resolved elements, each
//! returning the issues for one rule.
//!
//! - `constructor`: Ambiguous and unresolved bound constructors
//! - `manifest`: Parse failures and duplicate type declarations

pub mod constructor;
pub mod manifest;

pub use constructor::{check_ambiguous_constructor_issues, check_unresolved_constructor_issues};
pub use manifest::{check_duplicate_type_issues, check_parse_error_issues};
