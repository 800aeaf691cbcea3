//! Extensions for mapping foreign errors into `MapperResult` concisely.
//!
//! These helpers replace repetitive `.map_err(|e| Arc::new(MapperError::…(e)))`
//! chains when converting external error types into the crate's
//! `MapperResult<T>` alias (`Result<T, Arc<MapperError>>`).

use std::sync::Arc;

use crate::{MapperError, MapperResult};

/// Generic extension for mapping any `Result<T, E>` with `E: Into<MapperError>`
/// into a `MapperResult<T>`.
pub trait MapperResultExt<T, E> {
    /// Convert `Result<T, E>` into `MapperResult<T>` using `Into<MapperError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into `Arc<MapperError>`.
    fn into_mapper(self) -> MapperResult<T>;
}

impl<T, E> MapperResultExt<T, E> for Result<T, E>
where
    E: Into<MapperError>,
{
    fn into_mapper(self) -> MapperResult<T> {
        self.map_err(|e| Arc::new(e.into()))
    }
}
