use thiserror::Error;

/// Errors reported by the precise accessors (`get_e`, `with`, `with_mut`).
///
/// There are exactly two failure kinds; the zero-value accessors (`get`,
/// `stringer_get`) fold both into `T::default()` and never surface them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No entry exists for the requested key. Carries the key.
    #[error("value of key {0}: value not found")]
    ValueNotFound(String),
    /// An entry exists for the key, but its stored type is not the one
    /// requested. Carries the requested type's name.
    #[error("type {0}: wrong type")]
    WrongType(&'static str),
}
