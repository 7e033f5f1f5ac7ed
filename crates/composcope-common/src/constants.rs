//! System-wide constants and default values.

/// Default transport protocol for a published port.
pub const DEFAULT_PROTOCOL: &str = "tcp";

/// Prefix of the display image assigned to services built from a local
/// context instead of a registry image.
pub const BUILD_IMAGE_PREFIX: &str = "build from ";

/// Conventional file name for a compose document.
pub const DEFAULT_COMPOSE_FILE: &str = "docker-compose.yml";
