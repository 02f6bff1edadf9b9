//! Transform function library: kinds, pure functions, and the composition algebra.

pub mod composition;
pub mod functions;
pub mod kind;

pub use composition::{compose_function, compose_kind, PendingComposition};
pub use kind::{DeltaFlavor, TransformFunction, TransformKind};
