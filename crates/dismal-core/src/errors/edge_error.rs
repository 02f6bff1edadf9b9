/// Edge construction, lookup, and composition errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EdgeError {
    #[error("unknown transform kind tag: {tag}")]
    UnknownTransformKind { tag: String },

    #[error("vertex {name} is not registered in the graph")]
    UnknownVertex { name: String },

    #[error("no edge from {source_name} to {target_name}")]
    EdgeNotFound {
        source_name: String,
        target_name: String,
    },

    #[error("composition of {this} with {other} is not implemented: parameters must be supplied")]
    CompositionNotImplemented { this: String, other: String },

    #[error("composition of {this} with {other} is not supported by the type algebra")]
    UnsupportedComposition { this: String, other: String },
}
