//! Common types for the biblio implementation of the BiblioCommons API

#![warn(missing_docs)]
pub use chrono;
pub use context::ClientContext;
pub use error::MappingError;
pub use fields::Fields;
pub use smol_str;
pub use url;

/// The capability handed to nested entity constructors.
pub mod context;
pub mod error;
/// Field-by-field access to raw JSON objects.
pub mod fields;
/// Baseline scalar types shared by the entity models.
pub mod types;
