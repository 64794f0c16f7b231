use thiserror::Error;

/// Errors raised while building or querying a floor plan graph.
///
/// An unreachable destination is not an error - queries report it as an
/// explicit empty result, distinct from referencing an id that was never
/// registered.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("location `{0}` is already defined")]
    DuplicateLocation(String),

    #[error("unknown location `{0}`")]
    UnknownLocation(String),
}
