/// Lookups of vertices or values that do not exist.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RetrievalError {
    #[error("vertex {name} not found in graph")]
    VertexNotFound { name: String },

    #[error("vertex {vertex} has no value")]
    UndefinedValue { vertex: String },
}
