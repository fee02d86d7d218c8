//! Form metadata and required-field validation
//!
//! Each draft type exposes its fields as a static slice of [`FieldMetadata`];
//! [`validate`] walks that slice and [`submit`] gates the success callback.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::shared::metadata::{submit, FormProgress};
//!
//! match submit(&draft, |d| navigate_to_list(d)) {
//!     Ok(()) => {}
//!     Err(errors) => set_errors(errors),
//! }
//! let progress = FormProgress::of(&draft);
//! ```

mod form;
mod types;
mod validation;

pub use form::{submit, validate, FormProgress, ValidationErrors};
pub use types::{FieldKind, FieldMetadata, FieldValue, FormDraft};
pub use validation::ValidationRules;
