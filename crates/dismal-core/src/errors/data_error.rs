/// Invalid numeric state on a vertex.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DataError {
    #[error("vertex {vertex} cannot hold non-numeric value {value}")]
    NonNumericValue { vertex: String, value: f64 },

    #[error("vertex {vertex} has no value to compute a percent delta against")]
    UndefinedBase { vertex: String },
}
