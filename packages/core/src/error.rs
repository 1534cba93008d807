/// A result type with [`MountError`] as the default error.
pub type Result<T, E = MountError> = std::result::Result<T, E>;

/// Errors that can occur while mounting an element descriptor.
///
/// Every variant is fatal to the mount call that produced it. When a mount returns an error the node was never
/// appended to the container.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
    /// The descriptor is missing a kind, or names an element or attribute the host cannot create.
    #[error("Invalid element descriptor: {0}")]
    InvalidDescriptor(String),

    /// The container is missing, detached from its document, or cannot hold children.
    #[error("Invalid container: {0}")]
    InvalidContainer(String),

    /// The host document rejected an operation.
    #[error("Host document error: {0}")]
    Host(String),
}
