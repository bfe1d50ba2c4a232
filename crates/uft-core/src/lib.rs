#![deny(missing_docs)]
#![doc = "Core error, provenance-tagging, and mode types for the UFT constant derivation pipeline."]

pub mod errors;
mod mode;
mod schema;
mod value;

pub use errors::{ErrorInfo, UftError};
pub use mode::Mode;
pub use schema::SchemaVersion;
pub use value::{Source, TaggedValue};
