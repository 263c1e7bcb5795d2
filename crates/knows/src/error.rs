//! Error types for knows export operations.
//!
//! All fallible operations return [`Result<T>`] with context-rich error messages.

use thiserror::Error;

/// Result type alias for knows operations.
pub type Result<T> = std::result::Result<T, GraphError>;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Error type for graph lookups and exports.
///
/// Failures surface synchronously; nothing is cached or retried.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Node not found in the graph
    #[error("Node not found: {node_id}")]
    NodeNotFound {
        /// ID of the missing node
        node_id: String,
    },

    /// The requested output format name is not supported
    #[error("Unknown output format: {name}")]
    UnknownFormat {
        /// The name that failed the lookup
        name: String,
    },

    /// A property entry could not be written
    #[error("Failed to format property '{key}'")]
    Formatting {
        /// Key of the offending entry
        key: String,
    },

    /// A standard-format codec failed
    #[error("Codec error ({format}): {message}")]
    Codec {
        /// Format being generated
        format: String,
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// The graph drawer failed or produced unusable output
    #[error("Drawing error: {message}")]
    Drawing {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// File I/O error while writing an export
    #[error("I/O error: {message}")]
    Io {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Serialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },
}

fn boxed<E>(source: Option<E>) -> Option<BoxedSource>
where
    E: std::error::Error + Send + Sync + 'static,
{
    source.map(|e| Box::new(e) as BoxedSource)
}

impl GraphError {
    /// Create a codec error for the given format.
    pub fn codec<E>(format: impl Into<String>, message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Codec {
            format: format.into(),
            message: message.into(),
            source: boxed(source),
        }
    }

    /// Create a drawing error from a message and optional source.
    pub fn drawing<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Drawing {
            message: message.into(),
            source: boxed(source),
        }
    }

    /// Create an I/O error from a message and optional source.
    pub fn io<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Io {
            message: message.into(),
            source: boxed(source),
        }
    }

    /// Create a serialization error from a message and optional source.
    pub fn serialization<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization {
            message: message.into(),
            source: boxed(source),
        }
    }

    /// Create a formatting error naming the offending property key.
    pub fn formatting(key: impl Into<String>) -> Self {
        Self::Formatting { key: key.into() }
    }
}
