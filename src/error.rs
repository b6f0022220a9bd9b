// SPDX-License-Identifier: MPL-2.0
use crate::host::NodeId;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Mount(MountError),
}

/// Failures while putting an overlay on screen.
///
/// Returned by `Overlays::create` and `Overlays::open`. When mounting fails
/// the overlay is torn down again and never reaches the toast registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountError {
    /// The host tree cannot accept new nodes (window closed, surface lost).
    HostUnavailable,

    /// The overlay body failed to render into its detached container.
    RenderFailed(String),

    /// The overlay mounted but left its container without a root node.
    EmptyRender,

    /// The rendered root is already part of the host tree.
    AlreadyAttached(NodeId),

    /// No layer token above the host's highest layer is left.
    LayerExhausted,
}

impl fmt::Display for MountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MountError::HostUnavailable => write!(f, "host tree is unavailable"),
            MountError::RenderFailed(msg) => write!(f, "overlay failed to render: {}", msg),
            MountError::EmptyRender => write!(f, "overlay rendered no root node"),
            MountError::AlreadyAttached(node) => {
                write!(f, "node {} is already attached to the host", node)
            }
            MountError::LayerExhausted => write!(f, "no layer left above the host's layers"),
        }
    }
}

impl std::error::Error for MountError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Mount(e) => write!(f, "Mount Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<MountError> for Error {
    fn from(err: MountError) -> Self {
        Error::Mount(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
