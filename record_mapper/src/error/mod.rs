//! Error types produced while resolving, composing and invoking attributes.

mod constructors;
mod types;

pub use types::{KeyKind, MapperError};
