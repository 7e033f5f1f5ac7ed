//! Value types produced by the compose parser.
//!
//! Each record is constructed once during parsing and never mutated
//! afterwards. Sequences preserve the declaration order of the source
//! document throughout.

use std::fmt;

use composcope_common::constants::DEFAULT_PROTOCOL;

/// One service definition from a compose document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Service {
    /// Unique service name, the key of the source mapping entry.
    pub name: String,
    /// Image reference, or a `build from <path>` display string when the
    /// service is built from a local context instead.
    pub image: Option<String>,
    /// Networks the service attaches to, in declaration order.
    pub networks: Vec<String>,
    /// Reference to the service this one extends, if any.
    pub extends: Option<Extends>,
    /// Published ports, in declaration order.
    pub ports: Vec<Port>,
    /// Names of services this one depends on, as written in the source.
    pub depends_on: Vec<String>,
    /// Volumes mounted into the service, in declaration order.
    pub volumes: Vec<Volume>,
    /// Raw `service[:alias]` link entries, unparsed.
    pub links: Vec<String>,
}

/// A host-to-container port publication.
///
/// Both sides are kept as written in the source, so leading zeros and
/// ranges survive unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Port {
    /// Host-side port.
    pub host_port: String,
    /// Container-side port.
    pub container_port: String,
    /// Transport protocol, `tcp` unless the source says otherwise.
    pub protocol: String,
}

impl Port {
    /// Creates a port publication with the default protocol.
    #[must_use]
    pub fn new(host_port: impl Into<String>, container_port: impl Into<String>) -> Self {
        Self {
            host_port: host_port.into(),
            container_port: container_port.into(),
            protocol: DEFAULT_PROTOCOL.to_owned(),
        }
    }
}

/// A storage mount attached to a service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Volume {
    /// Source path or named volume; absent for anonymous volumes.
    pub source: Option<String>,
    /// Mount path inside the container.
    pub target: String,
    /// Kind of mount backing the volume.
    pub kind: VolumeType,
    /// Read-write or read-only access.
    pub access_mode: AccessMode,
}

impl Volume {
    /// Creates a mount of the default `volume` kind with read-write
    /// access.
    #[must_use]
    pub fn new(source: Option<String>, target: impl Into<String>) -> Self {
        Self {
            source,
            target: target.into(),
            kind: VolumeType::default(),
            access_mode: AccessMode::default(),
        }
    }
}

/// Kind of mount backing a [`Volume`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum VolumeType {
    /// Named volume managed by the engine.
    #[default]
    Volume,
    /// Bind mount of a host path.
    Bind,
    /// In-memory tmpfs mount.
    Tmpfs,
    /// Windows named pipe.
    Npipe,
}

impl VolumeType {
    /// Looks up a volume type by its wire name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "volume" => Some(Self::Volume),
            "bind" => Some(Self::Bind),
            "tmpfs" => Some(Self::Tmpfs),
            "npipe" => Some(Self::Npipe),
            _ => None,
        }
    }
}

impl fmt::Display for VolumeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Volume => write!(f, "volume"),
            Self::Bind => write!(f, "bind"),
            Self::Tmpfs => write!(f, "tmpfs"),
            Self::Npipe => write!(f, "npipe"),
        }
    }
}

/// Access mode of a [`Volume`] mount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AccessMode {
    /// Read-write access.
    #[default]
    ReadWrite,
    /// Read-only access.
    ReadOnly,
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadWrite => write!(f, "rw"),
            Self::ReadOnly => write!(f, "ro"),
        }
    }
}

/// A declared inheritance relation between two services.
///
/// Records the reference only; parent fields are never merged into the
/// extending service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extends {
    /// Name of the extended service.
    pub service_name: String,
    /// File the extended service lives in when the relation crosses
    /// files; not populated by the parser.
    pub from_file: Option<String>,
}

impl Extends {
    /// Creates a same-file extension reference.
    #[must_use]
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            from_file: None,
        }
    }
}
