//! Error types for capability resolution.

/// Errors from reaching a leaf through a [`LeafSource`](crate::LeafSource).
#[derive(Debug, thiserror::Error)]
pub enum DependentError {
    /// The provider behind the capability handle has been dropped.
    ///
    /// Holders of a [`Dependent`](crate::Dependent) must keep its provider
    /// alive; reaching this variant means that invariant was broken.
    #[error("leaf provider is no longer alive")]
    ProviderDropped,

    /// Writing the leaf's display to the sink failed.
    #[error("failed to write leaf display: {0}")]
    Io(#[from] std::io::Error),
}
