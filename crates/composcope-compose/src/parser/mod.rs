//! Compose document parser.
//!
//! Transforms a YAML compose file into a validated [`Compose`] value
//! through read, decode, and per-service conversion phases. Any
//! malformed entry aborts the whole parse; no partial collection is
//! ever returned.

mod raw;

use std::path::Path;

use composcope_common::constants::BUILD_IMAGE_PREFIX;
use composcope_common::error::{ComposcopeError, Result};

use self::raw::{RawBuild, RawDocument, RawNameList, RawPort, RawService, RawVolume};
use crate::compose::Compose;
use crate::model::{AccessMode, Extends, Port, Service, Volume, VolumeType};

/// Parses the compose file at `file_path` into a [`Compose`] collection.
///
/// Services are converted in declaration order. Keys outside the
/// recognized set are ignored.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not well-formed YAML,
/// parses to an empty document, declares no services, or contains a
/// malformed port or volume entry.
pub fn parse(file_path: impl AsRef<Path>) -> Result<Compose> {
    let path = file_path.as_ref();
    tracing::info!(path = %path.display(), "parsing compose file");

    let text = std::fs::read_to_string(path).map_err(|source| ComposcopeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(&text, path)
}

fn parse_document(text: &str, path: &Path) -> Result<Compose> {
    let value: serde_yaml::Value =
        serde_yaml::from_str(text).map_err(|source| ComposcopeError::Yaml {
            path: path.to_path_buf(),
            source,
        })?;
    if value.is_null() {
        return Err(ComposcopeError::EmptyDocument {
            path: path.to_path_buf(),
        });
    }

    let document: RawDocument =
        serde_yaml::from_value(value).map_err(|source| ComposcopeError::Yaml {
            path: path.to_path_buf(),
            source,
        })?;

    let raw_services = document.services.unwrap_or_default();
    if raw_services.is_empty() {
        return Err(ComposcopeError::MissingServices {
            path: path.to_path_buf(),
        });
    }

    let services = raw_services
        .into_iter()
        .map(|(name, body)| convert_service(name, body))
        .collect::<Result<Vec<Service>>>()?;

    Ok(Compose::new(services))
}

fn convert_service(name: String, body: RawService) -> Result<Service> {
    let RawService {
        image,
        build,
        networks,
        extends,
        ports,
        depends_on,
        volumes,
        links,
    } = body;

    // An explicit image wins over a build directive.
    let image = image.or_else(|| {
        build
            .and_then(RawBuild::into_context)
            .map(|context| format!("{BUILD_IMAGE_PREFIX}{context}"))
    });

    let networks = networks.map(RawNameList::into_names).unwrap_or_default();
    let extends = extends.and_then(|block| block.service.map(Extends::new));
    let ports = convert_ports(&name, ports)?;
    let depends_on = depends_on.map(RawNameList::into_names).unwrap_or_default();
    let volumes = convert_volumes(&name, volumes)?;
    let links = links.unwrap_or_default();

    tracing::debug!(
        service = %name,
        networks = networks.len(),
        ports = ports.len(),
        volumes = volumes.len(),
        "converted service"
    );

    Ok(Service {
        name,
        image,
        networks,
        extends,
        ports,
        depends_on,
        volumes,
        links,
    })
}

fn convert_ports(service: &str, entries: Option<Vec<RawPort>>) -> Result<Vec<Port>> {
    let mut ports = Vec::new();
    for entry in entries.unwrap_or_default() {
        let entry = entry.into_entry();
        let Some((host_port, container_port)) = entry.split_once(':') else {
            return Err(ComposcopeError::MalformedPort {
                service: service.to_owned(),
                entry,
            });
        };
        ports.push(Port::new(host_port, container_port));
    }
    Ok(ports)
}

fn convert_volumes(service: &str, entries: Option<Vec<RawVolume>>) -> Result<Vec<Volume>> {
    entries
        .unwrap_or_default()
        .into_iter()
        .map(|entry| convert_volume(service, entry))
        .collect()
}

fn convert_volume(service: &str, entry: RawVolume) -> Result<Volume> {
    match entry {
        RawVolume::Short(entry) => {
            let Some((source, target)) = entry.split_once(':') else {
                return Err(ComposcopeError::MalformedVolume {
                    service: service.to_owned(),
                    entry,
                });
            };
            Ok(Volume::new(Some(source.to_owned()), target))
        }
        RawVolume::Mount {
            source,
            target,
            kind,
        } => {
            let kind = match kind {
                Some(name) => VolumeType::from_name(&name).ok_or_else(|| {
                    ComposcopeError::UnknownVolumeType {
                        service: service.to_owned(),
                        value: name,
                    }
                })?,
                None => VolumeType::default(),
            };
            let target = target.ok_or_else(|| ComposcopeError::MissingVolumeTarget {
                service: service.to_owned(),
            })?;
            Ok(Volume {
                source,
                target,
                kind,
                access_mode: AccessMode::default(),
            })
        }
    }
}
