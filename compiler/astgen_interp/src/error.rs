use thiserror::Error;

/// A builder asked to create a node before it was complete.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum BuildError {
    #[error("cannot create `{type_name}`: the builder is not valid")]
    Invalid { type_name: String },
}
