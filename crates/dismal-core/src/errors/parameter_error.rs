/// Malformed transform parameter lists.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParameterError {
    #[error("transform parameters are not a sequence: found {found}")]
    NotASequence { found: String },

    #[error("{kind} transform is missing required parameter at index {index}")]
    MissingParameter { kind: String, index: usize },

    #[error("transform parameter at index {index} is not numeric: found {found}")]
    NonNumeric { index: usize, found: String },

    #[error("invalid random interval: low {low} is greater than high {high}")]
    InvalidRange { low: f64, high: f64 },
}
