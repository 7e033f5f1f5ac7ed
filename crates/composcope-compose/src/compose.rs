//! The parsed compose document as an ordered service collection.

use crate::model::Service;

/// Ordered collection of the services parsed from one compose document.
///
/// Owns its [`Service`] records exclusively. No deduplication and no
/// indexing by name is performed; iteration order equals declaration
/// order in the source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Compose {
    services: Vec<Service>,
}

impl Compose {
    /// Creates a collection from parsed services, preserving their order.
    #[must_use]
    pub const fn new(services: Vec<Service>) -> Self {
        Self { services }
    }

    /// Returns the services in declaration order.
    #[must_use]
    pub fn services(&self) -> &[Service] {
        &self.services
    }

    /// Returns every distinct network referenced by any service.
    ///
    /// Networks appear in first-seen order across the service sequence,
    /// with duplicates collapsed. The renderer uses this set to enumerate
    /// graph clusters.
    #[must_use]
    pub fn extract_networks(&self) -> Vec<String> {
        let mut networks: Vec<String> = Vec::new();
        for service in &self.services {
            for network in &service.networks {
                if !networks.iter().any(|seen| seen == network) {
                    networks.push(network.clone());
                }
            }
        }
        networks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn networked_service(name: &str, networks: &[&str]) -> Service {
        Service {
            name: name.into(),
            networks: networks.iter().map(|&n| n.into()).collect(),
            ..Service::default()
        }
    }

    #[test]
    fn empty_compose_has_no_networks() {
        let compose = Compose::new(Vec::new());
        assert!(compose.services().is_empty());
        assert!(compose.extract_networks().is_empty());
    }

    #[test]
    fn services_keep_insertion_order() {
        let compose = Compose::new(vec![
            networked_service("frontend", &[]),
            networked_service("monitoring", &[]),
            networked_service("backend", &[]),
        ]);
        let names: Vec<&str> = compose.services().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["frontend", "monitoring", "backend"]);
    }

    #[test]
    fn extract_networks_collapses_duplicates_in_first_seen_order() {
        let compose = Compose::new(vec![
            networked_service("frontend", &["front-tier", "back-tier"]),
            networked_service("monitoring", &["admin"]),
            networked_service("backend", &["back-tier", "admin"]),
        ]);
        assert_eq!(
            compose.extract_networks(),
            vec!["front-tier", "back-tier", "admin"]
        );
    }

    #[test]
    fn extract_networks_skips_services_without_networks() {
        let compose = Compose::new(vec![
            networked_service("base", &[]),
            networked_service("db", &["storage"]),
        ]);
        assert_eq!(compose.extract_networks(), vec!["storage"]);
    }
}
