/// Malformed construction arguments for vertices and graphs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InitError {
    #[error("vertex {vertex} was given a non-numeric value: {found}")]
    NonNumericValue { vertex: String, found: String },

    #[error("vertex {name} already exists in the graph")]
    DuplicateVertex { name: String },

    #[error("invalid inherent delta for vertex {vertex}: {reason}")]
    InvalidInherentDelta { vertex: String, reason: String },
}
