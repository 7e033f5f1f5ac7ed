//! Unified error types for the Composcope workspace.
//!
//! All failures raised while parsing a compose document are terminal for
//! that `parse` call: no partial results are produced and no recovery is
//! attempted. The caller decides how to present the message.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum ComposcopeError {
    /// The compose file could not be read from disk.
    #[error("cannot read '{path}': {source}")]
    Io {
        /// Path of the file that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file content is not well-formed YAML, or its top-level shape
    /// does not decode into a compose document.
    #[error("error parsing file '{path}': {source}")]
    Yaml {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying YAML parser error.
        source: serde_yaml::Error,
    },

    /// The document parsed to an empty top-level structure.
    #[error("empty compose file '{path}', aborting")]
    EmptyDocument {
        /// Path of the offending file.
        path: PathBuf,
    },

    /// The top-level `services` key is absent, null, or empty.
    #[error("no services found in '{path}', aborting")]
    MissingServices {
        /// Path of the offending file.
        path: PathBuf,
    },

    /// A ports entry lacks the `host:container` separator.
    #[error("invalid ports entry '{entry}' in service '{service}', aborting")]
    MalformedPort {
        /// Name of the service declaring the entry.
        service: String,
        /// The invalid entry as written in the source.
        entry: String,
    },

    /// A string-form volumes entry lacks the `source:target` separator.
    #[error("invalid volumes entry '{entry}' in service '{service}', aborting")]
    MalformedVolume {
        /// Name of the service declaring the entry.
        service: String,
        /// The invalid entry as written in the source.
        entry: String,
    },

    /// A structured volumes entry declares no `target` mount path.
    #[error("volume entry in service '{service}' has no target, aborting")]
    MissingVolumeTarget {
        /// Name of the service declaring the entry.
        service: String,
    },

    /// A volumes entry names a type outside the recognized set.
    #[error("unknown volume type '{value}' in service '{service}', aborting")]
    UnknownVolumeType {
        /// Name of the service declaring the entry.
        service: String,
        /// The unrecognized type name.
        value: String,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, ComposcopeError>;
