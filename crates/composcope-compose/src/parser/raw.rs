//! Raw wire shapes of a compose document.
//!
//! These types mirror the loosely-shaped YAML input, with untagged
//! unions for the fields that accept more than one source shape. They
//! exist only as a decoding step and never escape the parser module;
//! the conversion functions in [`super`] lower them into the canonical
//! [`crate::model`] records. Unknown keys are ignored at every level.

use indexmap::IndexMap;
use serde::Deserialize;

/// Top level of a compose document.
#[derive(Debug, Deserialize)]
pub(crate) struct RawDocument {
    /// The `services` mapping, keyed by service name in source order.
    pub(crate) services: Option<IndexMap<String, RawService>>,
}

/// One service body as written in the source.
#[derive(Debug, Deserialize)]
pub(crate) struct RawService {
    pub(crate) image: Option<String>,
    pub(crate) build: Option<RawBuild>,
    pub(crate) networks: Option<RawNameList>,
    pub(crate) extends: Option<RawExtends>,
    pub(crate) ports: Option<Vec<RawPort>>,
    pub(crate) depends_on: Option<RawNameList>,
    pub(crate) volumes: Option<Vec<RawVolume>>,
    pub(crate) links: Option<Vec<String>>,
}

/// A `build` directive, either a bare context path or the long form.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawBuild {
    /// `build: ./dir`
    Path(String),
    /// `build: { context: ./dir, ... }`
    Detailed {
        /// Build context directory.
        context: Option<String>,
    },
}

impl RawBuild {
    /// Returns the build context path, when one is declared.
    pub(crate) fn into_context(self) -> Option<String> {
        match self {
            Self::Path(path) => Some(path),
            Self::Detailed { context } => context,
        }
    }
}

/// A field that is either a list of names or a mapping keyed by name.
///
/// `networks` and `depends_on` both come in these two shapes; only the
/// names are kept, the per-name configuration is out of scope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawNameList {
    /// `networks: [front-tier, back-tier]`
    List(Vec<String>),
    /// `networks: { front-tier: {}, back-tier: {} }`
    Map(IndexMap<String, serde_yaml::Value>),
}

impl RawNameList {
    /// Flattens both shapes into the ordered name sequence.
    pub(crate) fn into_names(self) -> Vec<String> {
        match self {
            Self::List(names) => names,
            Self::Map(map) => map.into_keys().collect(),
        }
    }
}

/// An `extends` block. Only the `service` sub-key is carried forward.
#[derive(Debug, Deserialize)]
pub(crate) struct RawExtends {
    pub(crate) service: Option<String>,
}

/// One `ports` entry. A bare scalar number is accepted on the wire and
/// stringified before the separator check rejects it.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawPort {
    /// `- "8000:5000"`
    Text(String),
    /// `- 8000`
    Number(i64),
}

impl RawPort {
    /// Returns the entry as written in the source.
    pub(crate) fn into_entry(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
        }
    }
}

/// One `volumes` entry, structured or `source:target` shorthand.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawVolume {
    /// `- { type: bind, source: ./src, target: /app }`
    Mount {
        /// Source path or named volume.
        source: Option<String>,
        /// Mount path inside the container.
        target: Option<String>,
        /// Mount kind, one of the recognized volume type names.
        #[serde(rename = "type")]
        kind: Option<String>,
    },
    /// `- "db-data:/data"`
    Short(String),
}
